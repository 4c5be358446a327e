//! Request guards.
//!
//! - [`admin::RequireAdmin`] -- Runs the configured [`Authorizer`](crate::auth::Authorizer)
//!   and grants the session flag on first access.

pub mod admin;
