//! Multipart parsing for `POST /api/resume/upload`.

use axum::extract::Multipart;

use crate::errors::AppError;
use crate::extraction::UploadedDocument;

/// Fields of the upload form once the multipart stream has been drained.
#[derive(Debug)]
pub struct UploadForm {
    pub document: UploadedDocument,
    pub job_description: Option<String>,
}

/// Reads the `file` part (required) and the `job_description` part (optional).
/// Unknown parts are skipped; a repeated part keeps its last value. A body over the
/// configured limit surfaces as `AppError::PayloadTooLarge`.
pub async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut document = None;
    let mut job_description = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                document = Some(UploadedDocument { filename, bytes });
            }
            Some("job_description") => {
                job_description = Some(field.text().await?);
            }
            other => {
                tracing::debug!("Ignoring unexpected multipart field {other:?}");
            }
        }
    }

    let document =
        document.ok_or_else(|| AppError::UnprocessableEntity("file is required".to_string()))?;

    Ok(UploadForm {
        document,
        job_description,
    })
}
