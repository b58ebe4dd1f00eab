//! Error types for the respace library.
//!
//! The spacing and realignment primitives are total functions and never
//! return errors; this type covers the explicit construction paths
//! (compiling a match rule, parsing a category name).

use thiserror::Error;

/// Result type alias for respace operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the respace library.
#[derive(Error, Debug)]
pub enum Error {
    /// A match rule pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A category name did not match any known spacing category.
    #[error("Unknown spacing category: {0}")]
    UnknownCategory(String),
}
