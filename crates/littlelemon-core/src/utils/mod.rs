//! Utility functions for string formatting and comparison.

pub mod format;

// Re-export commonly used functions at module level
pub use format::{capitalize_words, cmp_localized, contains_ignore_case, eq_ignore_case};
