//! Source transcoding to UTF-8.
//!
//! Legal portals serve ISO-8859-1 pages, often with a wrong or missing
//! charset declaration. Bytes are decoded exactly once, into UTF-8, before
//! parsing; nothing downstream ever reinterprets text in another encoding.
//!
//! Encoding is picked in this order: byte-order mark, transport-declared
//! charset (HTTP `Content-Type`), `<meta charset>` in the first KB, configured
//! fallback. With `force_encoding` only the BOM and the fallback count.

use encoding_rs::Encoding;
use regex::bytes::Regex;
use std::sync::LazyLock;

use crate::config::ConversionConfig;
use crate::error::{ConversionError, Result};
use crate::utils::CHARSET_SNIFF_BYTES;

static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?\s*([a-z0-9_:.\-]+)"#)
        .expect("META_CHARSET_RE: hardcoded regex is valid")
});

/// HTML decoded to UTF-8, with the encoding actually used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSource {
    pub html: String,
    /// Canonical name of the encoding used (`"windows-1252"`, `"UTF-8"`, …)
    pub encoding: &'static str,
    /// True if malformed sequences were replaced with U+FFFD
    pub had_errors: bool,
}

/// Charset label declared in a `<meta>` tag near the top of the document.
#[must_use]
pub fn sniff_meta_charset(bytes: &[u8]) -> Option<String> {
    let head = &bytes[..bytes.len().min(CHARSET_SNIFF_BYTES)];
    let captures = META_CHARSET_RE.captures(head)?;
    let label = captures.get(1)?;
    Some(String::from_utf8_lossy(label.as_bytes()).into_owned())
}

/// Charset parameter of a `Content-Type` header value.
#[must_use]
pub fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
    })
}

fn resolve_label(label: &str) -> Option<&'static Encoding> {
    let resolved = Encoding::for_label(label.trim().as_bytes());
    if resolved.is_none() {
        tracing::warn!("Ignoring unknown charset declaration '{label}'");
    }
    resolved
}

/// Encoding named by `<meta charset>`. A page whose markup could be read to
/// find the declaration is ASCII-compatible, so a UTF-16 label there means UTF-8.
fn meta_declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let encoding = resolve_label(&sniff_meta_charset(bytes)?)?;
    if encoding == encoding_rs::UTF_16LE || encoding == encoding_rs::UTF_16BE {
        return Some(encoding_rs::UTF_8);
    }
    Some(encoding)
}

/// Decode `bytes` to UTF-8.
///
/// `declared` is a transport-level charset label, if any.
///
/// # Errors
///
/// Returns `InputTooLarge` when `bytes` exceeds `config.max_input_bytes()`.
pub fn decode_html(
    bytes: &[u8],
    declared: Option<&str>,
    config: &ConversionConfig,
) -> Result<DecodedSource> {
    if bytes.len() > config.max_input_bytes() {
        return Err(ConversionError::InputTooLarge {
            size: bytes.len(),
            limit: config.max_input_bytes(),
        });
    }

    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (html, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return Ok(DecodedSource {
            html: html.into_owned(),
            encoding: encoding.name(),
            had_errors,
        });
    }

    let fallback = config.fallback_encoding();
    let chosen = if config.force_encoding() {
        fallback
    } else {
        declared
            .and_then(resolve_label)
            .or_else(|| meta_declared_encoding(bytes))
            .unwrap_or(fallback)
    };

    let (html, had_errors) = chosen.decode_without_bom_handling(bytes);
    if had_errors && chosen != fallback {
        let (retry, retry_errors) = fallback.decode_without_bom_handling(bytes);
        if !retry_errors {
            tracing::warn!(
                "Source is not valid {}; decoded as {} instead",
                chosen.name(),
                fallback.name()
            );
            return Ok(DecodedSource {
                html: retry.into_owned(),
                encoding: fallback.name(),
                had_errors: false,
            });
        }
    }
    if had_errors {
        tracing::warn!("Malformed {} sequences replaced in source", chosen.name());
    }

    Ok(DecodedSource {
        html: html.into_owned(),
        encoding: chosen.name(),
        had_errors,
    })
}
