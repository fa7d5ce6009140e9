//! Core classification functionality.
//!
//! This module contains the classification operations:
//! - Site predicates (`is_*_url`)
//! - Field extractors (`parse_*_url`)
//! - The ordered matcher registry and dispatch

pub mod extractors;
pub mod matcher;
pub mod predicates;

// Re-export main functionality
pub use matcher::{classify, default_registry, extract, resolve, Extractor, Matcher, Predicate, Registry};
