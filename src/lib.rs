//! linkparser - Classify links to well-known sites and pull out their ids
//!
//! This crate recognises URLs from a fixed set of sites (code hosting, social
//! platforms, media and reference sites) and destructures them into the few
//! fields a renderer needs to show a rich embed instead of a plain hyperlink:
//! a GitHub pull request card, a tweet, a video player, and so on.
//!
//! # Features
//!
//! - **Pure**: predicates and extractors are side-effect free functions of a
//!   parsed URL
//! - **Ordered dispatch**: a [`Registry`] walks its matchers in order and the
//!   first hit wins, so results are deterministic
//! - **Injected context**: links to the deployment's own site are recognised
//!   through an explicit [`SiteContext`] rather than global state
//! - **Configurable**: the context can be loaded from a TOML [`SiteConfig`]
//!
//! # Quick Start
//!
//! ```
//! use linkparser::{resolve, Fields, ParsedUrl, SiteContext, SiteTag};
//!
//! let ctx = SiteContext::default();
//! let url = ParsedUrl::parse("https://www.bilibili.com/video/BV1tj42197hU")?;
//!
//! let result = resolve(&url, &ctx).unwrap();
//! assert_eq!(result.tag, SiteTag::BilibiliVideo);
//! assert_eq!(
//!     result.fields,
//!     Some(Fields::Media { kind: "video".into(), id: "BV1tj42197hU".into() })
//! );
//! # Ok::<(), linkparser::LinkError>(())
//! ```
//!
//! # Extractor contract
//!
//! Extractors do not validate. They assume the paired predicate already
//! returned true; on any other URL the fields they return are empty or
//! meaningless. Either check the predicate yourself or go through
//! [`Registry::resolve`].
//!
//! # Error Handling
//!
//! Classification never fails. [`LinkError`] only appears when turning a raw
//! string into a [`ParsedUrl`], when reading a [`SiteConfig`], or when parsing
//! a [`SiteTag`] name. A note id that is not a number is reported through the
//! [`NoteId::NotANumber`] sentinel.

// Re-export dispatch
pub use crate::core::{classify, default_registry, extract, resolve, Extractor, Matcher, Predicate, Registry};

// Re-export predicates and extractors
pub use crate::core::extractors::*;
pub use crate::core::predicates::*;

// Re-export public types
pub use crate::context::{load_config, SiteConfig, SiteContext};
pub use crate::error::LinkError;
pub use crate::types::{Fields, MatchResult, NoteId, SiteTag};
pub use crate::url::ParsedUrl;

// Module declarations
pub mod context;
pub mod core;
pub mod error;
pub mod types;
pub mod url;
