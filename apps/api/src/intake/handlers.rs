//! Axum route handlers for the form and the JSON render API.

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{Html, Response},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::intake::extract::{ResumeForm, ResumeJson};
use crate::intake::form::Submission;
use crate::layout::cursor::StepCounts;
use crate::layout::{layout_resume, LayoutPlan, TemplateName, TemplateStyle};
use crate::render::{render_document, RenderedDocument};
use crate::state::AppState;

pub const RENDER_ID_HEADER: &str = "x-render-id";
pub const WARNINGS_HEADER: &str = "x-layout-warnings";
/// Template actually used, after any fallback.
pub const TEMPLATE_HEADER: &str = "x-template";

const INDEX_HTML: &str = include_str!("../../assets/index.html");

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

/// Layout plan plus the step counts it was checked against.
#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    #[serde(flatten)]
    pub plan: LayoutPlan,
    pub steps: StepCounts,
    pub predicted_final_y: f32,
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub default: TemplateName,
    pub templates: Vec<&'static TemplateStyle>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /generate
pub async fn handle_generate(
    State(state): State<AppState>,
    ResumeForm(submission): ResumeForm,
) -> Result<Response, AppError> {
    render_and_deliver(&state, submission).await
}

/// POST /api/v1/render
pub async fn handle_render(
    State(state): State<AppState>,
    ResumeJson(submission): ResumeJson,
) -> Result<Response, AppError> {
    render_and_deliver(&state, submission).await
}

/// POST /api/v1/layout
///
/// Same input as the render endpoint; returns the draw operations, final
/// cursor, step counts and warnings instead of a PDF.
pub async fn handle_layout(ResumeJson(submission): ResumeJson) -> Json<LayoutResponse> {
    let plan = layout_resume(&submission.record, &submission.template);
    let steps = StepCounts::for_record(&submission.record);
    Json(LayoutResponse {
        plan,
        steps,
        predicted_final_y: steps.final_y(),
    })
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<TemplateListResponse> {
    Json(TemplateListResponse {
        default: TemplateName::default(),
        templates: TemplateName::ALL.iter().map(|t| t.style()).collect(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Delivery
// ────────────────────────────────────────────────────────────────────────────

async fn render_and_deliver(state: &AppState, submission: Submission) -> Result<Response, AppError> {
    let document = render_document(submission.record, submission.template).await?;

    // archive failure is fatal for the request
    if let Some(archive) = &state.archive {
        let location = archive.store(document.render_id, &document.bytes).await?;
        info!(render_id = %document.render_id, %location, "Render archived");
    }

    pdf_attachment(document, &state.config.download_filename)
}

fn pdf_attachment(document: RenderedDocument, filename: &str) -> Result<Response, AppError> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(header::CONTENT_LENGTH, document.bytes.len())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .header(RENDER_ID_HEADER, document.render_id.to_string())
        .header(WARNINGS_HEADER, document.warnings.len())
        .header(TEMPLATE_HEADER, document.template.as_str())
        .body(Body::from(document.bytes))
        .map_err(|e| AppError::Internal(e.into()))
}
