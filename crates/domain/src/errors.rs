//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Address is empty after normalization
    #[error("Address cannot be empty.")]
    EmptyAddress,

    /// Address exceeds the maximum length
    #[error("Address is too long (max {max} characters).")]
    AddressTooLong { max: usize },
}
