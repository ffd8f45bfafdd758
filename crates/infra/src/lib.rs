//! Infrastructure layer: repository adapters over the domain store ports.

pub mod stores;


pub use stores::{InMemoryProductStore, InMemoryWarrantyStore, JsonStore};
