//! Extended-warranty domain module.
//!
//! This crate contains the business rules for issuing extended warranties:
//! the validation pipeline, the pricing policy, and the chargeable-day
//! expiry arithmetic. Persistence is reached only through the repository
//! ports, so the logic stays deterministic and storage-free.

pub mod calendar;
pub mod error;
pub mod issuer;
pub mod pricing;
pub mod repository;
pub mod warranty;

pub use error::{IssueError, IssueResult};
pub use issuer::{IssueWarranty, WarrantyIssuer};
pub use pricing::{PREMIUM_PRICE_THRESHOLD, WarrantyQuote};
pub use repository::WarrantyRepository;
pub use warranty::{Warranty, WarrantyId};
