//! Row structs and read models.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct per query shape
//! the repositories return.

pub mod product;
