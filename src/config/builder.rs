//! Fluent builder for `ConversionConfig`
//!
//! Every field has a usable default; `build()` runs the same validation
//! that JSON-loaded configurations go through.

use crate::error::Result;

use super::types::{ConversionConfig, TagMapping};

#[derive(Debug, Clone, Default)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfig {
    #[must_use]
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

impl From<ConversionConfig> for ConversionConfigBuilder {
    /// Start from an existing configuration, e.g. one loaded from JSON.
    fn from(config: ConversionConfig) -> Self {
        Self { config }
    }
}

impl ConversionConfigBuilder {
    #[must_use]
    pub fn title_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.tags.title = tag.into();
        self
    }

    #[must_use]
    pub fn heading_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.tags.heading = tag.into();
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: TagMapping) -> Self {
        self.config.tags = tags;
        self
    }

    #[must_use]
    pub fn source_encoding(mut self, label: impl Into<String>) -> Self {
        self.config.source_encoding = Some(label.into());
        self
    }

    #[must_use]
    pub fn force_encoding(mut self, force: bool) -> Self {
        self.config.force_encoding = force;
        self
    }

    #[must_use]
    pub fn max_input_bytes(mut self, limit: usize) -> Self {
        self.config.max_input_bytes = limit;
        self
    }

    #[must_use]
    pub fn http_timeout_secs(mut self, secs: u64) -> Self {
        self.config.http_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Validate and produce the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for empty or clashing tag names and
    /// `UnknownEncoding` for labels `encoding_rs` does not know.
    pub fn build(self) -> Result<ConversionConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
