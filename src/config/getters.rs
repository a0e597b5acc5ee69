//! Getter methods for `ConversionConfig`

use super::types::{ConversionConfig, TagMapping};

impl ConversionConfig {
    #[must_use]
    pub fn tags(&self) -> &TagMapping {
        &self.tags
    }

    #[must_use]
    pub fn source_encoding(&self) -> Option<&str> {
        self.source_encoding.as_deref()
    }

    #[must_use]
    pub fn force_encoding(&self) -> bool {
        self.force_encoding
    }

    #[must_use]
    pub fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }

    #[must_use]
    pub fn http_timeout_secs(&self) -> u64 {
        self.http_timeout_secs
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
