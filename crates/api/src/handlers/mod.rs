//! Request handlers, grouped by audience.

pub mod admin;
pub mod session;
pub mod storefront;
