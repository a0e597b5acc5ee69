//! Error types for document loading and conversion
//!
//! The walker itself never fails on unexpected markup; these variants cover
//! the layers around it (retrieval, transcoding, parsing, configuration).

use crate::markdown_converter::ParsingState;

/// Errors that can occur while loading or converting a legal document
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// Reading a local source file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP request could not be completed
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP error {status}: {url}")]
    HttpStatus { url: String, status: u16 },

    /// Source exceeded the configured size cap
    #[error("Input too large: {size} bytes (limit {limit} bytes)")]
    InputTooLarge { size: usize, limit: usize },

    /// Encoding label not recognized by the transcoder
    #[error("Unknown encoding label: {0}")]
    UnknownEncoding(String),

    /// Parsed document has no `<body>` element
    #[error("Document has no <body> element")]
    MissingBody,

    /// Configuration rejected during validation or loading
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file was not valid JSON
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The walker exceeded its step budget
    #[error("Walk did not terminate after {steps} steps (state {state:?})")]
    WalkDidNotTerminate { steps: usize, state: ParsingState },
}

pub type Result<T> = std::result::Result<T, ConversionError>;
