//! Warranty pricing policy.

use serde::{Deserialize, Serialize};

use extenda_core::Money;

/// Price above which the premium tier applies (strict comparison).
pub const PREMIUM_PRICE_THRESHOLD: Money = Money::from_minor(500_000);

const PREMIUM_RATE_PCT: u8 = 20;
const STANDARD_RATE_PCT: u8 = 10;

const PREMIUM_EXTENSION_DAYS: u32 = 200;
const STANDARD_EXTENSION_DAYS: u32 = 100;

/// Warranty price and coverage length computed from a product price.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarrantyQuote {
    pub value: Money,
    pub extension_days: u32,
}

impl WarrantyQuote {
    /// Quote for a product price.
    ///
    /// Strictly above [`PREMIUM_PRICE_THRESHOLD`]: 20% of the price over
    /// 200 chargeable days. At or below it: 10% over 100 days.
    pub fn for_price(price: Money) -> Self {
        if price > PREMIUM_PRICE_THRESHOLD {
            Self {
                value: price.percent(PREMIUM_RATE_PCT),
                extension_days: PREMIUM_EXTENSION_DAYS,
            }
        } else {
            Self {
                value: price.percent(STANDARD_RATE_PCT),
                extension_days: STANDARD_EXTENSION_DAYS,
            }
        }
    }
}
