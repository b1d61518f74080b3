//! Error types for the crossword engine.
//!
//! This module defines the centralized error type [`PuzzleError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The navigation and selection core is deliberately infallible: out-of-range
//! lookups, missing words, and traversal boundaries all resolve to `None` (see
//! [`crate::puzzle::navigation`]). `PuzzleError` only surfaces from the puzzle
//! definition loading path, which touches files and parsers.

use thiserror::Error;

/// The main error type for crossword engine operations.
///
/// This enum consolidates the error conditions that can occur while loading and
/// validating puzzle definitions. Core gameplay queries never produce errors;
/// they signal degenerate situations with `None` instead.
///
/// # Examples
///
/// ```
/// use crosskey::PuzzleError;
///
/// fn validate_rows(rows: &[String]) -> Result<(), PuzzleError> {
///     if rows.is_empty() {
///         return Err(PuzzleError::Definition("layout has no rows".to_string()));
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// Puzzle definition failed validation.
    ///
    /// Occurs when a definition is structurally unusable, for example an empty
    /// layout. The string describes the specific problem.
    #[error("Definition error: {0}")]
    Definition(String),

    /// Definition file could not be parsed.
    ///
    /// Wraps TOML and JSON deserialization failures as a description string,
    /// since the two parser error types are interchangeable at this boundary.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for crossword engine operations.
///
/// This is a type alias for `std::result::Result<T, PuzzleError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use crosskey::Result;
///
/// fn load_something() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, PuzzleError>;
