//! Commerce error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Category name not in the fixed category set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Order intent requested for a product that cannot be ordered.
    #[error("{0} is out of stock")]
    OutOfStock(String),

    /// Slide index outside the carousel.
    #[error("Slide {index} out of range (carousel has {count} slides)")]
    SlideOutOfRange { index: usize, count: usize },

    /// A required contact form field is blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Contact e-mail is not shaped like an address.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// The contact sink rejected a submission.
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// Configuration value out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
