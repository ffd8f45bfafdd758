use std::collections::HashMap;
use std::sync::RwLock;

use extenda_core::RepositoryError;
use extenda_products::{Product, ProductCode, ProductRepository};
use extenda_warranty::{Warranty, WarrantyRepository};

/// In-memory product catalog.
///
/// Intended for tests/dev. Inserting an existing code replaces the record.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<HashMap<ProductCode, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductRepository for InMemoryProductStore {
    fn find_by_code(&self, code: &ProductCode) -> Result<Option<Product>, RepositoryError> {
        let products = self
            .products
            .read()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;
        Ok(products.get(code).cloned())
    }

    fn insert(&self, product: Product) -> Result<(), RepositoryError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;
        products.insert(product.code().clone(), product);
        Ok(())
    }
}

/// In-memory warranty ledger, keyed by product code.
///
/// Intended for tests/dev. The issuer enforces the one-warranty-per-code
/// invariant before inserting.
#[derive(Debug, Default)]
pub struct InMemoryWarrantyStore {
    warranties: RwLock<HashMap<ProductCode, Warranty>>,
}

impl InMemoryWarrantyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WarrantyRepository for InMemoryWarrantyStore {
    fn find_warrantied_product(
        &self,
        code: &ProductCode,
    ) -> Result<Option<Product>, RepositoryError> {
        let warranties = self
            .warranties
            .read()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;
        Ok(warranties.get(code).map(|w| w.product().clone()))
    }

    fn insert(&self, warranty: Warranty) -> Result<(), RepositoryError> {
        let mut warranties = self
            .warranties
            .write()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;
        warranties.insert(warranty.product().code().clone(), warranty);
        Ok(())
    }
}
