//! Domain error types.

use thiserror::Error;

/// Errors that can occur while building item containers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Two items share a name where names must be unique keys.
    #[error("Duplicate item name: {name}")]
    DuplicateItemName { name: String },
}
