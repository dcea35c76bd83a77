/*!
 * Error types for the c2rs application.
 *
 * This module contains custom error types for the translation pipeline,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while translating a header stream
#[derive(Error, Debug)]
pub enum TranslateError {
    /// Error reading input or writing translated output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error opening or reading the input file
    #[error("File error: {0}")]
    File(String),

    /// Error from the translation stream
    #[error("Translation error: {0}")]
    Translation(#[from] TranslateError),
}
