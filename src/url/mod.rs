//! URL handling for classification.
//!
//! This module contains the URL-side building blocks:
//! - The decomposed [`ParsedUrl`] value every predicate works on
//! - Path segment helpers shared by predicates and extractors

pub mod parsed;
pub mod utils;

// Re-export main functionality
pub use parsed::ParsedUrl;
pub use utils::{segment, segment_count, segments, joined_from, query_value};
