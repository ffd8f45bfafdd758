//! Product catalog domain module.
//!
//! This crate contains the product entity and the catalog port, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;
pub mod repository;

pub use product::{Product, ProductCode};
pub use repository::{FLAGGED_VOWEL_COUNT, ProductRepository};
