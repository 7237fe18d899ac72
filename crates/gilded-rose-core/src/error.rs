//! Error types for gilded-rose-core.

use thiserror::Error;

/// Result type alias for gilded-rose-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur while building items from text.
///
/// The update engine itself never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Input did not have the `name,sell_in,quality` shape.
    #[error("invalid item: {0}")]
    InvalidItem(String),

    /// A numeric field could not be parsed as an integer.
    #[error("invalid {field}: '{value}' is not an integer")]
    InvalidNumber { field: &'static str, value: String },
}
