//! Catalog port consumed by the warranty issuer.

use std::sync::Arc;

use extenda_core::RepositoryError;

use crate::product::{Product, ProductCode};

/// Vowel count that disqualifies a product code from warranty coverage.
pub const FLAGGED_VOWEL_COUNT: usize = 3;

/// Lookup/insert store of catalog products.
///
/// Any implementation satisfying this contract is substitutable: an
/// in-memory map for tests, a file- or table-backed adapter in deployment.
pub trait ProductRepository: Send + Sync {
    /// Product registered under `code`, if any.
    fn find_by_code(&self, code: &ProductCode) -> Result<Option<Product>, RepositoryError>;

    /// Register a product in the catalog.
    fn insert(&self, product: Product) -> Result<(), RepositoryError>;

    /// Whether `code` fails the vowel eligibility screen.
    ///
    /// The default applies the three-vowel rule to the code itself;
    /// adapters may override it with a stored flag.
    fn is_code_vowel_flagged(&self, code: &ProductCode) -> Result<bool, RepositoryError> {
        Ok(code.vowel_count() == FLAGGED_VOWEL_COUNT)
    }
}

impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    fn find_by_code(&self, code: &ProductCode) -> Result<Option<Product>, RepositoryError> {
        (**self).find_by_code(code)
    }

    fn insert(&self, product: Product) -> Result<(), RepositoryError> {
        (**self).insert(product)
    }

    fn is_code_vowel_flagged(&self, code: &ProductCode) -> Result<bool, RepositoryError> {
        (**self).is_code_vowel_flagged(code)
    }
}
