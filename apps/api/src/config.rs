use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Where uploads are staged while a decoder reads them from disk.
    pub upload_staging_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upload_staging_dir: std::env::var("UPLOAD_STAGING_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| std::env::temp_dir()),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(raw) => parse_byte_limit(&raw)?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}

fn parse_byte_limit(raw: &str) -> Result<usize> {
    let limit = raw
        .trim()
        .parse::<usize>()
        .with_context(|| format!("MAX_UPLOAD_BYTES must be a byte count, got '{raw}'"))?;
    anyhow::ensure!(limit > 0, "MAX_UPLOAD_BYTES must be greater than zero");
    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_byte_limit_accepts_plain_integer() {
        assert_eq!(parse_byte_limit("1048576").unwrap(), 1_048_576);
        assert_eq!(parse_byte_limit(" 42 ").unwrap(), 42);
    }

    #[test]
    fn test_parse_byte_limit_rejects_zero_and_garbage() {
        assert!(parse_byte_limit("0").is_err());
        assert!(parse_byte_limit("10MB").is_err());
        assert!(parse_byte_limit("-5").is_err());
    }
}
