//! Axum route handlers for the Resume API.

use axum::{
    extract::{multipart::MultipartRejection, rejection::FormRejection, Multipart, State},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::{analyze, AnalysisResult};
use crate::errors::AppError;
use crate::resume::upload::read_upload_form;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextForm {
    pub resume_text: String,
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub analysis: AnalysisResult,
    pub message: String,
}

impl AnalysisResponse {
    fn ok(analysis: AnalysisResult, message: &str) -> Self {
        Self {
            success: true,
            analysis,
            message: message.to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resume/upload
///
/// Multipart form: `file` (PDF or DOCX) and optional `job_description`.
/// Unsupported or undecodable files are rejected with 400.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let form = read_upload_form(multipart?).await?;
    let filename = form.document.filename.clone();

    let resume_text = state.extractor.extract_text(form.document).await?;
    let analysis = analyze(&resume_text, form.job_description.as_deref());
    info!(
        "Analyzed upload '{filename}': {} words, job match: {}",
        analysis.word_count,
        analysis.job_match.is_some()
    );

    Ok(Json(AnalysisResponse::ok(
        analysis,
        "Resume successfully analyzed",
    )))
}

/// POST /api/resume/analyze
///
/// URL-encoded form: `resume_text` and optional `job_description`.
/// Never touches the extractor. Form rejections use the same error body as
/// every other failure.
pub async fn handle_analyze_text(
    form: Result<Form<AnalyzeTextForm>, FormRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let Form(form) = form?;
    let analysis = analyze(&form.resume_text, form.job_description.as_deref());
    info!("Analyzed raw text: {} words", analysis.word_count);

    Ok(Json(AnalysisResponse::ok(
        analysis,
        "Text successfully analyzed",
    )))
}
