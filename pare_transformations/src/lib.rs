//! Reduction transformations for raw page markup.
//!
//! The pipeline is a fixed, ordered sequence of textual rewrite rules:
//! matching is non-recursive and non-validating, so malformed or
//! overlapping tags may produce partial results. That is the accepted
//! contract, not a defect to parse around.

/// Base transformations.
pub mod transformation;

// shortcut
pub use transformation::content::{reduce_content, reduce_html, ReduceMode};
pub use transformation::stats::ReduceStats;
