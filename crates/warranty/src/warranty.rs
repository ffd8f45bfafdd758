use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use extenda_core::{DomainError, Entity, Money};
use extenda_products::Product;

/// Warranty record identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarrantyId(Uuid);

impl WarrantyId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for WarrantyId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for WarrantyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for WarrantyId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for WarrantyId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("WarrantyId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// Extended coverage record tied to one product.
///
/// Created exactly once per product code by the issuer; never mutated after
/// creation. The warranty store owns the records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warranty {
    id: WarrantyId,
    product: Product,
    start_date: NaiveDate,
    end_date: NaiveDate,
    value: Money,
    customer_name: String,
}

impl Warranty {
    /// Assemble an already-validated warranty record.
    ///
    /// Validation happens in the issuer pipeline before this is reached.
    pub fn new(
        id: WarrantyId,
        product: Product,
        start_date: NaiveDate,
        end_date: NaiveDate,
        value: Money,
        customer_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            product,
            start_date,
            end_date,
            value,
            customer_name: customer_name.into(),
        }
    }

    pub fn id_typed(&self) -> WarrantyId {
        self.id
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn value(&self) -> Money {
        self.value
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }
}

impl Entity for Warranty {
    type Id = WarrantyId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extenda_products::ProductCode;

    #[test]
    fn warranty_id_round_trips_through_its_string_form() {
        let id = WarrantyId::new();
        let parsed: WarrantyId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn warranty_id_rejects_malformed_input() {
        let err = "not-a-uuid".parse::<WarrantyId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn warranty_keeps_the_covered_product_and_dates() {
        let product = Product::new(
            ProductCode::new("F01TSA100").unwrap(),
            "4K monitor",
            Money::from_minor(650_000),
        )
        .unwrap();
        let start = NaiveDate::from_ymd_opt(2019, 7, 11).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 4, 28).unwrap();

        let warranty = Warranty::new(
            WarrantyId::new(),
            product.clone(),
            start,
            end,
            Money::from_minor(130_000),
            "Leo",
        );

        assert_eq!(warranty.product(), &product);
        assert_eq!(warranty.start_date(), start);
        assert_eq!(warranty.end_date(), end);
        assert_eq!(warranty.customer_name(), "Leo");
    }
}
