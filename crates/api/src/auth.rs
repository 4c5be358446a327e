//! Admin authorization seam.
//!
//! The admin routes ask an [`Authorizer`] whether the current session may
//! proceed. The only implementation shipped is [`AutoGrant`], which lets
//! everyone in. Swap in a real implementation through
//! [`AppState::authorizer`](crate::state::AppState) before exposing the admin
//! routes to anyone.

use crate::session::Session;

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny,
}

/// Decides whether a session may use the admin routes.
pub trait Authorizer: Send + Sync {
    fn check(&self, session: &Session) -> Access;
}

/// Allows every request and marks the session as admin on first access.
///
/// INSECURE: there is no credential check at all. This exists only so the
/// admin interface works out of the box on a local demo store.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoGrant;

impl Authorizer for AutoGrant {
    fn check(&self, _session: &Session) -> Access {
        Access::Allow
    }
}
