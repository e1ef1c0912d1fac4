// Render: layout plan -> PDF bytes, plus the optional archive sink.
// PDF generation is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod archive;
pub mod encoding;
pub mod pdf;

use bytes::Bytes;
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::layout::{layout_resume, LayoutWarning, TemplateName};
use crate::models::resume::ResumeRecord;
use crate::render::pdf::{render_pdf, DocumentMeta};

pub use archive::{DiskArchive, DocumentArchive};

/// A finished PDF, held in memory until it is streamed back.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Fresh per render; names the archived copy and tags log lines.
    pub render_id: Uuid,
    pub template: TemplateName,
    pub warnings: Vec<LayoutWarning>,
    pub bytes: Bytes,
}

/// Lays out and renders one résumé.
///
/// Malformed entries and unknown template names never fail the render; they
/// come back as `warnings`. Only a failure to produce the PDF itself is an
/// error.
pub async fn render_document(
    record: ResumeRecord,
    template: String,
) -> Result<RenderedDocument, AppError> {
    let render_id = Uuid::new_v4();

    let (plan, bytes) = tokio::task::spawn_blocking(move || {
        let plan = layout_resume(&record, &template);
        let meta = DocumentMeta::for_record(&record, Utc::now());
        render_pdf(&plan, &meta).map(|bytes| (plan, bytes))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))?
    .map_err(|e| AppError::Render(e.to_string()))?;

    debug!(%render_id, lines = plan.lines().len(), ops = plan.ops.len(), "Layout plan built");
    for warning in &plan.warnings {
        warn!(%render_id, ?warning, "Layout warning");
    }
    info!(
        %render_id,
        template = plan.template.as_str(),
        warnings = plan.warnings.len(),
        bytes = bytes.len(),
        final_y = plan.final_y,
        "Rendered resume"
    );

    Ok(RenderedDocument {
        render_id,
        template: plan.template,
        warnings: plan.warnings,
        bytes: Bytes::from(bytes),
    })
}
