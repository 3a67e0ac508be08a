//! Axum route handlers for extraction and CV improvement.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::extract_document;
use crate::improvement::pipeline::{run, ImproveMode, ImproveOutcome, ImproveTarget};
use crate::improvement::{PromptBuilder, TemplateVariant};
use crate::models::UploadedDocument;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub text: String,
    pub page_count: usize,
    pub char_count: usize,
}

/// `mode` and `variant` stay raw strings so unknown values are reported
/// through `AppError` like the multipart form does.
#[derive(Debug, Deserialize)]
pub struct ImproveRequest {
    pub cv_text: String,
    pub mode: Option<String>,
    pub job_description: Option<String>,
    pub minimum_qualification: Option<String>,
    pub variant: Option<String>,
}

/// Fields of the multipart form used by the upload endpoints.
#[derive(Debug, Default)]
struct UploadForm {
    document: Option<UploadedDocument>,
    mode: Option<String>,
    job_description: Option<String>,
    minimum_qualification: Option<String>,
    variant: Option<String>,
}

impl UploadForm {
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "file" => {
                    let file_name = field.file_name().map(String::from);
                    let content_type = field.content_type().map(String::from);
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
                    form.document = Some(UploadedDocument::new(bytes, file_name, content_type));
                }
                "mode" | "job_description" | "minimum_qualification" | "variant" => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| AppError::Validation(format!("Could not read '{name}': {e}")))?;
                    match name.as_str() {
                        "mode" => form.mode = Some(value),
                        "job_description" => form.job_description = Some(value),
                        "minimum_qualification" => form.minimum_qualification = Some(value),
                        _ => form.variant = Some(value),
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// The uploaded PDF, or a validation error when it is absent or not a PDF.
    fn take_pdf(&mut self) -> Result<UploadedDocument, AppError> {
        let document = self
            .document
            .take()
            .ok_or_else(|| AppError::Validation("A PDF file is required in field 'file'".to_string()))?;
        if !document.looks_like_pdf() {
            return Err(AppError::Validation(
                "Only PDF files are accepted".to_string(),
            ));
        }
        Ok(document)
    }

    fn target(&mut self) -> Result<ImproveTarget, AppError> {
        Ok(ImproveTarget::from_parts(
            parse_mode(self.mode.as_deref())?,
            self.job_description.take(),
            self.minimum_qualification.take(),
        )?)
    }

    fn variant(&self) -> Result<Option<TemplateVariant>, AppError> {
        parse_variant(self.variant.as_deref())
    }
}

/// Absent or blank means general mode.
fn parse_mode(raw: Option<&str>) -> Result<ImproveMode, AppError> {
    match raw.filter(|m| !m.trim().is_empty()) {
        Some(raw) => raw.parse::<ImproveMode>().map_err(AppError::Validation),
        None => Ok(ImproveMode::General),
    }
}

fn parse_variant(raw: Option<&str>) -> Result<Option<TemplateVariant>, AppError> {
    raw.filter(|v| !v.trim().is_empty())
        .map(|v| v.parse::<TemplateVariant>().map_err(AppError::Validation))
        .transpose()
}

fn builder_for(state: &AppState, variant: Option<TemplateVariant>) -> PromptBuilder {
    match variant {
        Some(variant) => state.prompts.with_variant(variant),
        None => state.prompts,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/extract
///
/// Multipart `file` → plain text of every page, in order.
pub async fn handle_extract(multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let mut form = UploadForm::read(multipart).await?;
    let document = form.take_pdf()?;
    let extracted = extract_document(document).await?;

    Ok(Json(ExtractResponse {
        char_count: extracted.char_count(),
        page_count: extracted.page_count,
        text: extracted.text,
    }))
}

/// POST /api/v1/improve
///
/// Improves already-extracted CV text. Specific mode requires both job fields;
/// when either is missing no completion call is made.
pub async fn handle_improve(
    State(state): State<AppState>,
    Json(request): Json<ImproveRequest>,
) -> Result<Json<ImproveOutcome>, AppError> {
    let target = ImproveTarget::from_parts(
        parse_mode(request.mode.as_deref())?,
        request.job_description,
        request.minimum_qualification,
    )?;
    let builder = builder_for(&state, parse_variant(request.variant.as_deref())?);

    let outcome = run(state.gateway.as_ref(), &builder, &request.cv_text, &target).await?;
    info!("Improve request {} finished ({})", outcome.request_id, outcome.mode);
    Ok(Json(outcome))
}

/// POST /api/v1/improve/upload
///
/// Extract and improve in one request. Job fields are validated before the
/// PDF is parsed, so a withheld request does no work at all.
pub async fn handle_improve_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ImproveOutcome>, AppError> {
    let mut form = UploadForm::read(multipart).await?;
    let target = form.target()?;
    let builder = builder_for(&state, form.variant()?);
    let document = form.take_pdf()?;

    let extracted = extract_document(document).await?;
    let outcome = run(state.gateway.as_ref(), &builder, extracted.as_str(), &target).await?;
    info!("Upload improve request {} finished ({})", outcome.request_id, outcome.mode);
    Ok(Json(outcome))
}
