// Resume API: file upload and raw-text analysis.
// Uploads go through the extractor first; text requests go straight to the analyzer.

pub mod handlers;
pub mod upload;
