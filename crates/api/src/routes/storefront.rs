//! Route definitions for the public catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::{session, storefront};
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET  /                 -> home
/// GET  /brand/{brand}    -> by_brand
/// GET  /product/{id}     -> detail
/// GET  /signout          -> signout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(storefront::home))
        .route("/brand/{brand}", get(storefront::by_brand))
        .route("/product/{id}", get(storefront::detail))
        .route("/signout", get(session::signout))
}
