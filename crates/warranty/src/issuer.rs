//! Warranty issuance pipeline (application-level orchestration).
//!
//! ```text
//! IssueWarranty
//!   ↓
//! 1. customer name present
//!   ↓
//! 2. product exists in the catalog
//!   ↓
//! 3. no warranty already covers the code
//!   ↓
//! 4. code passes the vowel eligibility screen
//!   ↓
//! price the coverage, compute the expiry date, persist the record
//! ```
//!
//! Checks run in a fixed order; the first failure wins and nothing is
//! written before every check has passed. The issuer composes the two
//! repository ports and performs no locking of its own: callers serialize
//! concurrent issuance attempts against the same code.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use extenda_core::RepositoryError;
use extenda_products::{Product, ProductCode, ProductRepository};

use crate::calendar;
use crate::error::{IssueError, IssueResult};
use crate::pricing::WarrantyQuote;
use crate::repository::WarrantyRepository;
use crate::warranty::{Warranty, WarrantyId};

/// Request to issue an extended warranty.
///
/// Carries the current business date explicitly so the pipeline stays
/// deterministic; callers pass today's date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueWarranty {
    pub code: ProductCode,
    pub customer_name: Option<String>,
    pub requested_on: NaiveDate,
}

/// Sole entry point for issuing warranties and checking warranty status.
#[derive(Debug)]
pub struct WarrantyIssuer<P, W> {
    products: P,
    warranties: W,
}

impl<P, W> WarrantyIssuer<P, W>
where
    P: ProductRepository,
    W: WarrantyRepository,
{
    pub fn new(products: P, warranties: W) -> Self {
        Self { products, warranties }
    }

    /// Register a product in the catalog.
    pub fn register_product(&self, product: Product) -> Result<(), RepositoryError> {
        self.products.insert(product)
    }

    /// True iff a warranty record already covers `code`. Side-effect-free.
    pub fn has_warranty(&self, code: &ProductCode) -> Result<bool, RepositoryError> {
        Ok(self.warranties.find_warrantied_product(code)?.is_some())
    }

    /// Issue an extended warranty for a catalog product.
    ///
    /// Runs the validation pipeline, prices the coverage, computes the
    /// expiry through the chargeable-day calendar and persists the record.
    /// Returns the created warranty.
    pub fn issue(&self, request: IssueWarranty) -> IssueResult<Warranty> {
        match self.try_issue(&request) {
            Ok(warranty) => {
                info!(
                    code = %warranty.product().code(),
                    value = warranty.value().minor(),
                    end_date = %warranty.end_date(),
                    "extended warranty issued"
                );
                Ok(warranty)
            }
            Err(err) => {
                warn!(code = %request.code, %err, "warranty request rejected");
                Err(err)
            }
        }
    }

    fn try_issue(&self, request: &IssueWarranty) -> IssueResult<Warranty> {
        let Some(customer_name) = normalized_name(request.customer_name.as_deref()) else {
            return Err(IssueError::CustomerNameMissing);
        };

        let product = self
            .products
            .find_by_code(&request.code)?
            .ok_or(IssueError::ProductNotFound)?;

        if self.has_warranty(&request.code)? {
            return Err(IssueError::WarrantyAlreadyExists);
        }

        if self.products.is_code_vowel_flagged(&request.code)? {
            return Err(IssueError::IneligibleProduct);
        }

        let quote = WarrantyQuote::for_price(product.price());
        let end_date = calendar::advance(request.requested_on, quote.extension_days);

        let warranty = Warranty::new(
            WarrantyId::new(),
            product,
            request.requested_on,
            end_date,
            quote.value,
            customer_name,
        );
        self.warranties.insert(warranty.clone())?;

        Ok(warranty)
    }
}

/// Absent and blank names both count as "not provided".
fn normalized_name(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::RwLock;

    use extenda_core::Money;

    /// Scripted catalog double: serves one preset product and a fixed
    /// eligibility verdict.
    struct StubCatalog {
        product: Option<Product>,
        flagged: bool,
    }

    impl ProductRepository for StubCatalog {
        fn find_by_code(&self, _code: &ProductCode) -> Result<Option<Product>, RepositoryError> {
            Ok(self.product.clone())
        }

        fn insert(&self, _product: Product) -> Result<(), RepositoryError> {
            Ok(())
        }

        fn is_code_vowel_flagged(&self, _code: &ProductCode) -> Result<bool, RepositoryError> {
            Ok(self.flagged)
        }
    }

    /// Scripted ledger double: reports one preset covered product and
    /// records inserts.
    struct StubLedger {
        covered: Option<Product>,
        inserted: RwLock<Vec<Warranty>>,
    }

    impl StubLedger {
        fn empty() -> Self {
            Self { covered: None, inserted: RwLock::new(Vec::new()) }
        }

        fn covering(product: Product) -> Self {
            Self { covered: Some(product), inserted: RwLock::new(Vec::new()) }
        }

        fn inserted_count(&self) -> usize {
            self.inserted.read().map(|records| records.len()).unwrap_or(0)
        }
    }

    impl WarrantyRepository for StubLedger {
        fn find_warrantied_product(
            &self,
            _code: &ProductCode,
        ) -> Result<Option<Product>, RepositoryError> {
            Ok(self.covered.clone())
        }

        fn insert(&self, warranty: Warranty) -> Result<(), RepositoryError> {
            self.inserted
                .write()
                .map_err(|_| RepositoryError::storage("lock poisoned"))?
                .push(warranty);
            Ok(())
        }
    }

    fn lenovo(price_minor: u64) -> Product {
        Product::new(
            ProductCode::new("F01TSA100").unwrap(),
            "Lenovo laptop",
            Money::from_minor(price_minor),
        )
        .unwrap()
    }

    fn request(code: &str, customer: Option<&str>) -> IssueWarranty {
        IssueWarranty {
            code: ProductCode::new(code).unwrap(),
            customer_name: customer.map(str::to_owned),
            requested_on: NaiveDate::from_ymd_opt(2019, 7, 11).unwrap(),
        }
    }

    #[test]
    fn has_warranty_reports_a_covered_code() {
        let product = lenovo(100_000);
        let issuer = WarrantyIssuer::new(
            StubCatalog { product: None, flagged: false },
            StubLedger::covering(product.clone()),
        );

        assert!(issuer.has_warranty(product.code()).unwrap());
    }

    #[test]
    fn has_warranty_reports_an_uncovered_code() {
        let issuer = WarrantyIssuer::new(
            StubCatalog { product: None, flagged: false },
            StubLedger::empty(),
        );

        assert!(!issuer.has_warranty(&ProductCode::new("F01TSA100").unwrap()).unwrap());
    }

    #[test]
    fn absent_customer_name_is_rejected_first() {
        // The name check precedes the catalog lookup: even with no product
        // registered, the missing name wins.
        let issuer = WarrantyIssuer::new(
            StubCatalog { product: None, flagged: true },
            StubLedger::empty(),
        );

        let err = issuer.issue(request("F01TSA100", None)).unwrap_err();
        assert_eq!(err, IssueError::CustomerNameMissing);
    }

    #[test]
    fn empty_customer_name_counts_as_missing() {
        let issuer = WarrantyIssuer::new(
            StubCatalog { product: Some(lenovo(100_000)), flagged: false },
            StubLedger::empty(),
        );

        let err = issuer.issue(request("F01TSA100", Some(""))).unwrap_err();
        assert_eq!(err, IssueError::CustomerNameMissing);
    }

    #[test]
    fn whitespace_only_customer_name_counts_as_missing() {
        let issuer = WarrantyIssuer::new(
            StubCatalog { product: Some(lenovo(100_000)), flagged: false },
            StubLedger::empty(),
        );

        let err = issuer.issue(request("F01TSA100", Some("   "))).unwrap_err();
        assert_eq!(err, IssueError::CustomerNameMissing);
    }

    #[test]
    fn unknown_product_is_rejected() {
        let issuer = WarrantyIssuer::new(
            StubCatalog { product: None, flagged: false },
            StubLedger::empty(),
        );

        let err = issuer.issue(request("F01TSA100", Some("Leo"))).unwrap_err();
        assert_eq!(err, IssueError::ProductNotFound);
    }

    #[test]
    fn already_covered_product_is_rejected_before_the_vowel_screen() {
        let product = lenovo(100_000);
        let issuer = WarrantyIssuer::new(
            StubCatalog { product: Some(product.clone()), flagged: true },
            StubLedger::covering(product),
        );

        let err = issuer.issue(request("F01TSA100", Some("Leo"))).unwrap_err();
        assert_eq!(err, IssueError::WarrantyAlreadyExists);
    }

    #[test]
    fn flagged_code_is_rejected_regardless_of_price() {
        let issuer = WarrantyIssuer::new(
            StubCatalog { product: Some(lenovo(9_000_000)), flagged: true },
            StubLedger::empty(),
        );

        let err = issuer.issue(request("S01H1ATEI", Some("Leo"))).unwrap_err();
        assert_eq!(err, IssueError::IneligibleProduct);
    }

    #[test]
    fn rejected_requests_write_nothing() {
        let ledger = StubLedger::empty();
        let issuer = WarrantyIssuer::new(
            StubCatalog { product: Some(lenovo(100_000)), flagged: true },
            ledger,
        );

        assert!(issuer.issue(request("S01H1ATEI", Some("Leo"))).is_err());
        assert_eq!(issuer.warranties.inserted_count(), 0);
    }

    #[test]
    fn premium_priced_product_gets_the_premium_coverage() {
        let issuer = WarrantyIssuer::new(
            StubCatalog { product: Some(lenovo(600_000)), flagged: false },
            StubLedger::empty(),
        );

        let warranty = issuer.issue(request("F01TSA100", Some("Leo"))).unwrap();

        let start = NaiveDate::from_ymd_opt(2019, 7, 11).unwrap();
        assert_eq!(warranty.value(), Money::from_minor(120_000));
        assert_eq!(warranty.start_date(), start);
        assert_eq!(warranty.end_date(), calendar::advance(start, 200));
        assert_eq!(warranty.customer_name(), "Leo");
        assert_eq!(issuer.warranties.inserted_count(), 1);
    }

    #[test]
    fn standard_priced_product_gets_the_standard_coverage() {
        let issuer = WarrantyIssuer::new(
            StubCatalog { product: Some(lenovo(100_000)), flagged: false },
            StubLedger::empty(),
        );

        let warranty = issuer.issue(request("F01TSA100", Some("Leo"))).unwrap();

        let start = NaiveDate::from_ymd_opt(2019, 7, 11).unwrap();
        assert_eq!(warranty.value(), Money::from_minor(10_000));
        assert_eq!(warranty.end_date(), calendar::advance(start, 100));
    }

    #[test]
    fn customer_name_is_trimmed_before_storage() {
        let issuer = WarrantyIssuer::new(
            StubCatalog { product: Some(lenovo(100_000)), flagged: false },
            StubLedger::empty(),
        );

        let warranty = issuer.issue(request("F01TSA100", Some("  Leo "))).unwrap();
        assert_eq!(warranty.customer_name(), "Leo");
    }
}
