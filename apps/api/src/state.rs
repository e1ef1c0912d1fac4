use std::sync::Arc;

use crate::config::Config;
use crate::render::{DiskArchive, DocumentArchive};

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-render data; every render owns its own record, cursor and bytes.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Optional copy of every rendered PDF. `None` streams only.
    pub archive: Option<Arc<dyn DocumentArchive>>,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let archive = config
            .archive_dir
            .clone()
            .map(|dir| Arc::new(DiskArchive::new(dir)) as Arc<dyn DocumentArchive>);
        AppState { config, archive }
    }
}
