//! Error types for URL parsing, configuration and tag lookup.
//!
//! Classification itself never fails: predicates return `false` and
//! extractors return empty fields. These errors only surface at the edges,
//! when a raw string has to become a [`ParsedUrl`](crate::ParsedUrl) or when a
//! site configuration is read.

use thiserror::Error;

/// Errors that can occur before or around classification.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinkError {
    /// The input string is not a valid absolute URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The site configuration could not be read or deserialized.
    #[error("Invalid site configuration: {0}")]
    Config(String),

    /// A site tag name did not match any known tag.
    #[error("Unknown site tag: {0}")]
    UnknownTag(String),
}

impl From<url::ParseError> for LinkError {
    fn from(err: url::ParseError) -> Self {
        LinkError::InvalidUrl(err.to_string())
    }
}

impl From<toml::de::Error> for LinkError {
    fn from(err: toml::de::Error) -> Self {
        LinkError::Config(err.to_string())
    }
}
