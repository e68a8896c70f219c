//! Text Extractor: stages an uploaded document on disk, runs the decoder for its
//! format and returns normalized plain text.
//!
//! The decoders read from file paths, so every upload is written to a uniquely named
//! `NamedTempFile` inside the staging directory. The guard owns the file for the whole
//! decode and removes it when dropped, on success, on decoder error, and when the
//! decoder panics and unwinds.

mod docx;
mod pdf;

#[cfg(test)]
pub(crate) use docx::sample_docx;
#[cfg(test)]
pub(crate) use pdf::sample_pdf;

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Document formats the extractor can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolves the format from the last `.`-separated segment of a filename,
    /// ignoring case. A name without a dot is treated as its own extension.
    pub fn from_filename(filename: &str) -> Result<Self, ExtractionError> {
        let extension = filename.rsplit('.').next().unwrap_or_default().to_lowercase();
        match extension.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            _ => Err(ExtractionError::UnsupportedFormat { extension }),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => f.write_str("PDF"),
            DocumentFormat::Docx => f.write_str("DOCX"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported file format '{extension}'")]
    UnsupportedFormat { extension: String },

    #[error("failed to extract text from {format} file: {message}")]
    ExtractionFailed {
        format: DocumentFormat,
        message: String,
    },

    #[error("failed to stage upload: {0}")]
    Staging(#[from] io::Error),
}

/// A file received in a single request. Never persisted.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone)]
pub struct TextExtractor {
    staging_dir: PathBuf,
}

impl TextExtractor {
    pub fn new(staging_dir: impl Into<PathBuf>) -> Self {
        Self {
            staging_dir: staging_dir.into(),
        }
    }

    pub fn staging_dir(&self) -> &Path {
        &self.staging_dir
    }

    /// Extracts plain text from an uploaded PDF or DOCX.
    ///
    /// The format check happens before anything touches the disk.
    pub async fn extract_text(&self, document: UploadedDocument) -> Result<String, ExtractionError> {
        let format = DocumentFormat::from_filename(&document.filename)?;
        info!(
            "Extracting text from '{}' ({format}, {} bytes)",
            document.filename,
            document.bytes.len()
        );

        self.decode_staged(format, document.bytes, decoder_for(format))
            .await
    }

    /// Stages `bytes` and runs `decoder` on the blocking pool. The staged file moves
    /// into that closure so it is released there even if this future is dropped early.
    async fn decode_staged(
        &self,
        format: DocumentFormat,
        bytes: Bytes,
        decoder: Decoder,
    ) -> Result<String, ExtractionError> {
        let staging_dir = self.staging_dir.clone();
        tokio::task::spawn_blocking(move || extract_staged(&staging_dir, format, &bytes, decoder))
            .await
            .map_err(|e| {
                if e.is_panic() {
                    warn!("{format} decoder panicked");
                    ExtractionError::ExtractionFailed {
                        format,
                        message: "document could not be decoded".to_string(),
                    }
                } else {
                    ExtractionError::Staging(io::Error::other(e.to_string()))
                }
            })?
    }
}

/// Reads a staged file and returns its text, or a human-readable failure.
type Decoder = fn(&Path) -> Result<String, String>;

fn decoder_for(format: DocumentFormat) -> Decoder {
    match format {
        DocumentFormat::Pdf => pdf::extract,
        DocumentFormat::Docx => docx::extract,
    }
}

fn stage(dir: &Path, format: DocumentFormat, bytes: &[u8]) -> io::Result<NamedTempFile> {
    let mut staged = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(&format!(".{}", format.extension()))
        .tempfile_in(dir)?;
    staged.write_all(bytes)?;
    staged.flush()?;
    Ok(staged)
}

fn extract_staged(
    dir: &Path,
    format: DocumentFormat,
    bytes: &[u8],
    decoder: Decoder,
) -> Result<String, ExtractionError> {
    let staged = stage(dir, format, bytes)?;
    debug!("Staged upload at {}", staged.path().display());

    let decoded = decoder(staged.path());

    let path = staged.path().to_path_buf();
    if let Err(e) = staged.close() {
        warn!("Failed to remove staged upload {}: {e}", path.display());
    }

    decoded.map_err(|message| ExtractionError::ExtractionFailed { format, message })
}
