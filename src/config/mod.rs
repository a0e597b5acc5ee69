//! Configuration module for document conversion
//!
//! This module provides the `ConversionConfig` struct and its builder for
//! configuring tag mapping, source decoding and retrieval limits.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::ConversionConfigBuilder;
pub use types::{ConversionConfig, TagMapping};
