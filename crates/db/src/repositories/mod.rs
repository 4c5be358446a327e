//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&mut DbConnection` as the first argument.

pub mod product_repo;

pub use product_repo::ProductRepo;
