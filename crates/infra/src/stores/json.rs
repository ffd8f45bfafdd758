use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use tracing::debug;

use extenda_core::RepositoryError;
use extenda_products::{Product, ProductCode, ProductRepository};
use extenda_warranty::{Warranty, WarrantyRepository};

/// Serializable snapshot of the catalog and the warranty ledger.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreState {
    products: HashMap<ProductCode, Product>,
    warranties: HashMap<ProductCode, Warranty>,
}

/// JSON-file-backed store implementing both repository ports.
///
/// One persistence system backs both the catalog and the ledger, so a
/// single handle can be shared (via `Arc`) as the issuer's two
/// collaborators. The whole state lives in memory and the file is
/// rewritten on every insert. Single-process only: concurrent writers to
/// the same path are not coordinated.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    state: RwLock<StoreState>,
}

impl JsonStore {
    /// Open a store at `path`, loading existing state if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let path = path.into();
        let state = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| {
                RepositoryError::storage(format!("read {}: {e}", path.display()))
            })?;
            serde_json::from_str(&raw).map_err(|e| {
                RepositoryError::serialization(format!("parse {}: {e}", path.display()))
            })?
        } else {
            StoreState::default()
        };
        Ok(Self { path, state: RwLock::new(state) })
    }

    fn read_state(&self) -> Result<RwLockReadGuard<'_, StoreState>, RepositoryError> {
        self.state.read().map_err(|_| RepositoryError::storage("lock poisoned"))
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, StoreState>, RepositoryError> {
        self.state.write().map_err(|_| RepositoryError::storage("lock poisoned"))
    }

    fn persist(&self, state: &StoreState) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string_pretty(state)
            .map_err(|e| RepositoryError::serialization(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| {
            RepositoryError::storage(format!("write {}: {e}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), "store state persisted");
        Ok(())
    }
}

impl ProductRepository for JsonStore {
    fn find_by_code(&self, code: &ProductCode) -> Result<Option<Product>, RepositoryError> {
        Ok(self.read_state()?.products.get(code).cloned())
    }

    fn insert(&self, product: Product) -> Result<(), RepositoryError> {
        let mut state = self.write_state()?;
        state.products.insert(product.code().clone(), product);
        self.persist(&state)
    }
}

impl WarrantyRepository for JsonStore {
    fn find_warrantied_product(
        &self,
        code: &ProductCode,
    ) -> Result<Option<Product>, RepositoryError> {
        Ok(self.read_state()?.warranties.get(code).map(|w| w.product().clone()))
    }

    fn insert(&self, warranty: Warranty) -> Result<(), RepositoryError> {
        let mut state = self.write_state()?;
        state.warranties.insert(warranty.product().code().clone(), warranty);
        self.persist(&state)
    }
}
