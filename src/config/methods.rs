//! Loading, validation and tag resolution for `ConversionConfig`

use std::path::Path;

use encoding_rs::Encoding;

use crate::error::{ConversionError, Result};
use crate::markdown_converter::TagCategory;

use super::types::{ConversionConfig, TagMapping};

impl TagMapping {
    #[must_use]
    pub fn new(title: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            heading: heading.into(),
        }
    }

    /// Resolve an element name to its structural tag category.
    ///
    /// `p`, `table` and `hr` are fixed; the two heading categories come from
    /// the mapping. Anything else is `Other`.
    #[must_use]
    pub fn category_of(&self, element_name: &str) -> TagCategory {
        if element_name.eq_ignore_ascii_case(&self.title) {
            TagCategory::HeadingLevel1
        } else if element_name.eq_ignore_ascii_case(&self.heading) {
            TagCategory::HeadingLevel2
        } else if element_name.eq_ignore_ascii_case("p") {
            TagCategory::Paragraph
        } else if element_name.eq_ignore_ascii_case("table") {
            TagCategory::Table
        } else if element_name.eq_ignore_ascii_case("hr") {
            TagCategory::HorizontalRule
        } else {
            TagCategory::Other
        }
    }
}

const FIXED_TAGS: [&str; 3] = ["p", "table", "hr"];

impl ConversionConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` for malformed JSON and the validation errors of
    /// [`ConversionConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file written as JSON.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, otherwise as
    /// [`ConversionConfig::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Resolve the configured fallback encoding.
    #[must_use]
    pub fn fallback_encoding(&self) -> &'static Encoding {
        self.source_encoding
            .as_deref()
            .and_then(|label| Encoding::for_label(label.trim().as_bytes()))
            .unwrap_or(encoding_rs::WINDOWS_1252)
    }

    /// Check the invariants the classifier and loader rely on.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` or `UnknownEncoding`.
    pub fn validate(&self) -> Result<()> {
        let title = self.tags.title.trim();
        let heading = self.tags.heading.trim();

        if title.is_empty() || heading.is_empty() {
            return Err(ConversionError::InvalidConfig(
                "title and heading tags must be non-empty".to_string(),
            ));
        }
        if title.eq_ignore_ascii_case(heading) {
            return Err(ConversionError::InvalidConfig(format!(
                "title and heading tags must differ (both '{title}')"
            )));
        }
        for tag in [title, heading] {
            if FIXED_TAGS.iter().any(|fixed| fixed.eq_ignore_ascii_case(tag)) {
                return Err(ConversionError::InvalidConfig(format!(
                    "'{tag}' already has a fixed structural role"
                )));
            }
        }

        if let Some(label) = self.source_encoding.as_deref()
            && Encoding::for_label(label.trim().as_bytes()).is_none()
        {
            return Err(ConversionError::UnknownEncoding(label.to_string()));
        }

        if self.max_input_bytes == 0 {
            return Err(ConversionError::InvalidConfig(
                "max_input_bytes must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mapping_matches_portal_markup() {
        let tags = TagMapping::default();
        assert_eq!(tags.category_of("h2"), TagCategory::HeadingLevel1);
        assert_eq!(tags.category_of("H4"), TagCategory::HeadingLevel2);
        assert_eq!(tags.category_of("p"), TagCategory::Paragraph);
        assert_eq!(tags.category_of("table"), TagCategory::Table);
        assert_eq!(tags.category_of("hr"), TagCategory::HorizontalRule);
        assert_eq!(tags.category_of("h1"), TagCategory::Other);
        assert_eq!(tags.category_of("div"), TagCategory::Other);
    }

    #[test]
    fn test_validate_rejects_clashing_tags() {
        let config = ConversionConfig::builder().title_tag("h2").heading_tag("H2").build();
        assert!(matches!(config, Err(ConversionError::InvalidConfig(_))));

        let config = ConversionConfig::builder().heading_tag("p").build();
        assert!(matches!(config, Err(ConversionError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_unknown_encoding() {
        let config = ConversionConfig::builder().source_encoding("klingon-8").build();
        assert!(matches!(config, Err(ConversionError::UnknownEncoding(_))));
    }

    #[test]
    fn test_fallback_encoding_latin1_is_windows_1252() {
        let config = ConversionConfig::default();
        assert_eq!(config.fallback_encoding(), encoding_rs::WINDOWS_1252);
    }
}
