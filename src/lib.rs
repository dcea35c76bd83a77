/*!
 * # c2rs - C header constants to Rust
 *
 * A small library and CLI for translating C-style header declarations
 * into Rust constant declarations.
 *
 * ## Features
 *
 * - Translate object-like `#define` macros into `pub const` declarations
 * - Translate enum-style `NAME = VALUE` assignments the same way
 * - Preserve trailing block comments as `///` doc comments
 * - Forward everything else unchanged, byte for byte
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `line_translator`: line classification and rewriting
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod errors;
pub mod line_translator;

// Re-export main types for easier usage
pub use errors::{AppError, TranslateError};
pub use line_translator::{classify_line, translate, LineOutput, TranslationStats};
