//! Storefront domain logic.
//!
//! Pure functions and types shared by the storage and HTTP layers: product
//! form normalization, the partial-update merge, price coercion, the brand
//! catalog, and the demo data generator. Nothing in here touches the
//! database or the network.

pub mod catalog;
pub mod error;
pub mod product;
pub mod seed;
pub mod types;
