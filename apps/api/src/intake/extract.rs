//! `ResumeForm` extractor: accepts the HTML form either urlencoded or as
//! `multipart/form-data`. `ResumeJson` takes the same submission as a JSON
//! body. Both reject through `AppError`.

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};

use crate::errors::AppError;
use crate::intake::form::{submission_from_fields, Submission};

pub struct ResumeForm(pub Submission);

pub struct ResumeJson(pub Submission);

#[async_trait]
impl<S> FromRequest<S> for ResumeJson
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(submission) = Json::<Submission>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read JSON body: {}", e.body_text())))?;
        Ok(ResumeJson(submission))
    }
}

#[async_trait]
impl<S> FromRequest<S> for ResumeForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        let fields = if is_multipart {
            multipart_fields(Multipart::from_request(req, state).await.map_err(|e| {
                AppError::Validation(format!("Failed to read multipart form: {}", e.body_text()))
            })?)
            .await?
        } else {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read form: {}", e.body_text())))?;
            fields
        };

        tracing::debug!(fields = fields.len(), multipart = is_multipart, "Form received");
        Ok(ResumeForm(submission_from_fields(&fields)))
    }
}

async fn multipart_fields(mut multipart: Multipart) -> Result<HashMap<String, String>, AppError> {
    let mut fields = HashMap::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read multipart field: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read field '{name}': {e}")))?;
        fields.insert(name, value);
    }
    Ok(fields)
}
