//! Repository adapters.
//!
//! Two variants of the same ports: in-memory maps for tests and
//! development, and a JSON-file-backed store for single-process
//! deployments.

pub mod in_memory;
pub mod json;

pub use in_memory::{InMemoryProductStore, InMemoryWarrantyStore};
pub use json::JsonStore;
