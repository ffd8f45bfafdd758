//! Warranty issuance error taxonomy.

use thiserror::Error;

use extenda_core::RepositoryError;

/// Result type for issuance operations.
pub type IssueResult<T> = Result<T, IssueError>;

/// Why a warranty request was rejected.
///
/// The validation variants are caller-visible, non-recoverable and raised at
/// the point of detection; no writes happen before the first failing check.
/// Callers match on variants, never on message text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IssueError {
    /// Customer name absent, empty, or whitespace-only.
    #[error("customer name was not provided")]
    CustomerNameMissing,

    /// No product is registered under the given code.
    #[error("product does not exist")]
    ProductNotFound,

    /// A warranty record already covers this code.
    #[error("product already has an extended warranty")]
    WarrantyAlreadyExists,

    /// The code fails the vowel eligibility screen.
    #[error("product is not eligible for an extended warranty")]
    IneligibleProduct,

    /// A store collaborator failed; not a validation outcome.
    #[error("repository failure: {0}")]
    Repository(#[from] RepositoryError),
}
