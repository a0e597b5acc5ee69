//! Core configuration types for document conversion
//!
//! This module contains the `ConversionConfig` struct and the `TagMapping`
//! that tells the classifier which element names play which heading role.

use serde::{Deserialize, Serialize};

use crate::utils::{
    DEFAULT_HEADING_TAG, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_SOURCE_ENCODING, DEFAULT_TITLE_TAG,
    DEFAULT_USER_AGENT, MAX_INPUT_BYTES,
};

/// Element names that map onto the two heading categories.
///
/// Legal portals do not use `h1`/`h2` the way generic HTML does: the document
/// title is an `h2` and every structural heading below it is an `h4`.
/// Element names are compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagMapping {
    /// Element name treated as heading level 1 (the main title)
    pub title: String,
    /// Element name treated as heading level 2 (section, chapter, provisions)
    pub heading: String,
}

impl Default for TagMapping {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE_TAG.to_string(),
            heading: DEFAULT_HEADING_TAG.to_string(),
        }
    }
}

/// Main configuration struct for conversion operations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    pub(crate) tags: TagMapping,

    /// Encoding label applied when the source has no BOM and no
    /// `<meta charset>`. `None` falls back to the portal default.
    pub(crate) source_encoding: Option<String>,

    /// Ignore any declared charset and always decode with `source_encoding`
    pub(crate) force_encoding: bool,

    pub(crate) max_input_bytes: usize,
    pub(crate) http_timeout_secs: u64,
    pub(crate) user_agent: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            tags: TagMapping::default(),
            source_encoding: Some(DEFAULT_SOURCE_ENCODING.to_string()),
            force_encoding: false,
            max_input_bytes: MAX_INPUT_BYTES,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
