//! Tests for configuration loading, the builder and validation

use assert_fs::prelude::*;
use kodegen_tools_lexscrape::{ConversionConfig, ConversionError, TagMapping};

#[test]
fn test_builder_defaults() {
    let config = ConversionConfig::builder().build().unwrap();

    assert_eq!(config.tags(), &TagMapping::new("h2", "h4"));
    assert_eq!(config.source_encoding(), Some("iso-8859-1"));
    assert!(!config.force_encoding());
    assert_eq!(config.max_input_bytes(), 10 * 1024 * 1024);
    assert_eq!(config.http_timeout_secs(), 30);
    assert!(config.user_agent().starts_with("kodegen-lexscrape/"));
}

#[test]
fn test_builder_overrides() {
    let config = ConversionConfig::builder()
        .title_tag("h1")
        .heading_tag("h3")
        .source_encoding("utf-8")
        .force_encoding(true)
        .max_input_bytes(4096)
        .http_timeout_secs(5)
        .user_agent("test-agent")
        .build()
        .unwrap();

    assert_eq!(config.tags().title, "h1");
    assert_eq!(config.tags().heading, "h3");
    assert_eq!(config.source_encoding(), Some("utf-8"));
    assert!(config.force_encoding());
    assert_eq!(config.max_input_bytes(), 4096);
    assert_eq!(config.http_timeout_secs(), 5);
    assert_eq!(config.user_agent(), "test-agent");
    assert_eq!(config.fallback_encoding(), encoding_rs::UTF_8);
}

#[test]
fn test_validation_errors() {
    let empty = ConversionConfig::builder().title_tag("  ").build();
    assert!(matches!(empty, Err(ConversionError::InvalidConfig(_))));

    let fixed = ConversionConfig::builder().title_tag("TABLE").build();
    assert!(matches!(fixed, Err(ConversionError::InvalidConfig(_))));

    let zero = ConversionConfig::builder().max_input_bytes(0).build();
    assert!(matches!(zero, Err(ConversionError::InvalidConfig(_))));
}

#[test]
fn test_load_partial_json_file() {
    let dir = assert_fs::TempDir::new().unwrap();
    let file = dir.child("lexscrape.json");
    file.write_str(r#"{ "tags": { "heading": "h3" }, "force_encoding": true }"#)
        .unwrap();

    let config = ConversionConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.tags(), &TagMapping::new("h2", "h3"));
    assert!(config.force_encoding());
    assert_eq!(config.source_encoding(), Some("iso-8859-1"));
}

#[test]
fn test_load_json_file_validates() {
    let dir = assert_fs::TempDir::new().unwrap();
    let file = dir.child("bad.json");
    file.write_str(r#"{ "source_encoding": "ebcdic-klingon" }"#).unwrap();

    let result = ConversionConfig::from_json_file(file.path());
    assert!(matches!(result, Err(ConversionError::UnknownEncoding(label)) if label == "ebcdic-klingon"));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let result = ConversionConfig::from_json_str("{ tags: ");
    assert!(matches!(result, Err(ConversionError::ConfigParse(_))));
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = assert_fs::TempDir::new().unwrap();
    let result = ConversionConfig::from_json_file(dir.child("absent.json").path());
    assert!(matches!(result, Err(ConversionError::Io(_))));
}

#[test]
fn test_config_serializes_round_trip_through_json() {
    let config = ConversionConfig::builder().heading_tag("h5").build().unwrap();
    let json = serde_json::to_string(&config).unwrap();
    let loaded = ConversionConfig::from_json_str(&json).unwrap();
    assert_eq!(loaded.tags(), config.tags());
}
