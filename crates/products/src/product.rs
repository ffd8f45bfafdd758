use core::str::FromStr;

use serde::{Deserialize, Serialize};

use extenda_core::{DomainError, DomainResult, Entity, Money};

/// Externally assigned product code (unique within the catalog).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    pub fn new(code: impl Into<String>) -> DomainResult<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::invalid_id("product code cannot be empty"));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of vowel characters in the code, case-insensitive.
    pub fn vowel_count(&self) -> usize {
        self.0
            .chars()
            .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
            .count()
    }
}

impl core::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Catalog entity: a product eligible for sale and, possibly, for an
/// extended warranty.
///
/// Immutable once created; the catalog store owns the records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    code: ProductCode,
    name: String,
    price: Money,
}

impl Product {
    pub fn new(code: ProductCode, name: impl Into<String>, price: Money) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self { code, name, price })
    }

    pub fn code(&self) -> &ProductCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

impl Entity for Product {
    type Id = ProductCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}
