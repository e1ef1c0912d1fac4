use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_DOWNLOAD_FILENAME: &str = "resume.pdf";

/// Application configuration loaded from environment variables.
/// Every variable is optional; only a malformed `PORT` fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Suggested filename in the `Content-Disposition` header.
    pub download_filename: String,
    /// When set, every rendered PDF is also written here as `<render_id>.pdf`.
    pub archive_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            download_filename: DEFAULT_DOWNLOAD_FILENAME.to_string(),
            archive_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        Ok(Config {
            port: match lookup("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            download_filename: lookup("DOWNLOAD_FILENAME")
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(defaults.download_filename),
            archive_dir: lookup("ARCHIVE_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.download_filename, "resume.pdf");
        assert!(config.archive_dir.is_none());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = config_from(&[
            ("PORT", "5000"),
            ("RUST_LOG", "debug"),
            ("DOWNLOAD_FILENAME", "cv.pdf"),
            ("ARCHIVE_DIR", "/var/lib/vitae"),
        ])
        .unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.download_filename, "cv.pdf");
        assert_eq!(config.archive_dir, Some(PathBuf::from("/var/lib/vitae")));
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = config_from(&[("DOWNLOAD_FILENAME", "  "), ("ARCHIVE_DIR", "")]).unwrap();
        assert_eq!(config.download_filename, "resume.pdf");
        assert!(config.archive_dir.is_none());
    }
}
