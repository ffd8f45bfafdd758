//! Warranty ledger port consumed by the issuer.

use std::sync::Arc;

use extenda_core::RepositoryError;
use extenda_products::{Product, ProductCode};

use crate::warranty::Warranty;

/// Store of issued warranties, keyed by product code.
pub trait WarrantyRepository: Send + Sync {
    /// Product covered by a warranty under `code`, if any.
    fn find_warrantied_product(
        &self,
        code: &ProductCode,
    ) -> Result<Option<Product>, RepositoryError>;

    /// Record an issued warranty.
    fn insert(&self, warranty: Warranty) -> Result<(), RepositoryError>;
}

impl<R> WarrantyRepository for Arc<R>
where
    R: WarrantyRepository + ?Sized,
{
    fn find_warrantied_product(
        &self,
        code: &ProductCode,
    ) -> Result<Option<Product>, RepositoryError> {
        (**self).find_warrantied_product(code)
    }

    fn insert(&self, warranty: Warranty) -> Result<(), RepositoryError> {
        (**self).insert(warranty)
    }
}
