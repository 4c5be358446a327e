//! Session lifecycle handlers.

use axum::response::{IntoResponse, Redirect};

use crate::session::{ClearSession, Flash, Notice};

/// GET /signout
///
/// Drops the admin flag and sends the browser home.
pub async fn signout() -> impl IntoResponse {
    tracing::info!("Session signed out");
    (ClearSession, Flash(Notice::SignedOut), Redirect::to("/"))
}
