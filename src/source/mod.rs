//! Document retrieval: local files or `http(s)` URLs.
//!
//! Retrieval only produces bytes plus whatever charset the transport
//! declared; turning them into text is [`encoding::decode_html`]'s job.

pub mod encoding;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::path::Path;
use std::time::Duration;

use crate::config::ConversionConfig;
use crate::error::{ConversionError, Result};
use crate::utils::is_valid_url;

pub use encoding::{DecodedSource, charset_from_content_type, decode_html, sniff_meta_charset};

/// Raw source document as retrieved.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Path or URL the bytes came from
    pub origin: String,
    pub bytes: Vec<u8>,
    /// Charset from the HTTP `Content-Type` header, if any
    pub declared_charset: Option<String>,
}

impl SourceDocument {
    /// Decode to UTF-8 honoring the transport-declared charset.
    ///
    /// # Errors
    ///
    /// See [`decode_html`].
    pub fn decode(&self, config: &ConversionConfig) -> Result<DecodedSource> {
        decode_html(&self.bytes, self.declared_charset.as_deref(), config)
    }
}

/// Load `source`, which is either an `http(s)` URL or a local path.
///
/// # Errors
///
/// Returns `Io`, `Http`, `HttpStatus` or `InputTooLarge`.
pub async fn load_source(source: &str, config: &ConversionConfig) -> Result<SourceDocument> {
    if is_valid_url(source) {
        fetch_source(source, config).await
    } else {
        read_source(Path::new(source), config).await
    }
}

/// Read a local HTML file.
///
/// # Errors
///
/// Returns `Io` or `InputTooLarge`.
pub async fn read_source(path: &Path, config: &ConversionConfig) -> Result<SourceDocument> {
    let size = tokio::fs::metadata(path).await?.len();
    let size = usize::try_from(size).unwrap_or(usize::MAX);
    check_size(size, config)?;

    let bytes = tokio::fs::read(path).await?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

    Ok(SourceDocument {
        origin: path.display().to_string(),
        bytes,
        declared_charset: None,
    })
}

/// Download an HTML page.
///
/// # Errors
///
/// Returns `Http` for transport failures, `HttpStatus` for non-success
/// responses and `InputTooLarge` past the size cap.
pub async fn fetch_source(url: &str, config: &ConversionConfig) -> Result<SourceDocument> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs()))
        .user_agent(config.user_agent())
        .build()?;

    tracing::debug!("Downloading: {url}");
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!("HTTP {} error: {}", status.as_u16(), url);
        return Err(ConversionError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    if let Some(length) = response.content_length() {
        check_size(usize::try_from(length).unwrap_or(usize::MAX), config)?;
    }

    let declared_charset = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(charset_from_content_type);

    let bytes = response.bytes().await?;
    check_size(bytes.len(), config)?;

    Ok(SourceDocument {
        origin: url.to_string(),
        bytes: bytes.to_vec(),
        declared_charset,
    })
}

fn check_size(size: usize, config: &ConversionConfig) -> Result<()> {
    if size > config.max_input_bytes() {
        return Err(ConversionError::InputTooLarge {
            size,
            limit: config.max_input_bytes(),
        });
    }
    Ok(())
}
