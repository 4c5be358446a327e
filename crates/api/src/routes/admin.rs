//! Route definitions for the admin interface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET        /                       -> dashboard
/// GET        /products               -> list_products
/// GET, POST  /products/new           -> new_form, create
/// GET, POST  /products/{id}/edit     -> edit_form, update
/// POST       /products/{id}/delete   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::dashboard))
        .route("/products", get(admin::list_products))
        .route("/products/new", get(admin::new_form).post(admin::create))
        .route(
            "/products/{id}/edit",
            get(admin::edit_form).post(admin::update),
        )
        .route("/products/{id}/delete", post(admin::delete))
}
