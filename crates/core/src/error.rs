//! Domain and repository error models.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic construction/validation failures.
/// Business-rule rejections have their own closed taxonomies in the domain
/// crates; infrastructure concerns belong in [`RepositoryError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure, empty code).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

/// Repository adapter error.
///
/// Raised by store implementations (in-memory doubles, file-backed
/// adapters), never by pure domain logic. String payloads keep the type
/// `Clone + Eq` so rejected requests stay cheap to pass around and assert on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store failed (IO, lock poisoning, corrupt state).
    #[error("storage failure: {0}")]
    Storage(String),

    /// Stored state could not be encoded or decoded.
    #[error("serialization failure: {0}")]
    Serialization(String),
}

impl RepositoryError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}
