//! Admin pages: dashboard, product listing, and product create/edit/delete.
//!
//! Every handler takes [`RequireAdmin`] first and returns it as the first
//! response part so the session flag is set on first access.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Serialize;
use storefront_core::error::CoreError;
use storefront_core::product::{self, ProductForm};
use storefront_core::types::DbId;
use storefront_db::models::product::{DashboardStats, Product};
use storefront_db::repositories::ProductRepo;

use crate::error::AppResult;
use crate::extract::ProductId;
use crate::middleware::admin::RequireAdmin;
use crate::query::SearchParams;
use crate::response::Page;
use crate::session::{Flash, Notice, Session};
use crate::state::AppState;

pub const PRODUCTS_PATH: &str = "/admin/products";
pub const NEW_PRODUCT_PATH: &str = "/admin/products/new";

pub fn edit_product_path(id: DbId) -> String {
    format!("/admin/products/{id}/edit")
}

#[derive(Debug, Serialize)]
pub struct ProductListView {
    pub products: Vec<Product>,
    pub q: String,
}

/// Create and edit forms. `product` prefills the edit form.
#[derive(Debug, Serialize)]
pub struct ProductFormView {
    pub action: String,
    pub product: Option<Product>,
}

// ---------------------------------------------------------------------------
// GET /admin
// ---------------------------------------------------------------------------

/// Totals, price aggregates, per-category counts, and the latest products.
pub async fn dashboard(
    admin: RequireAdmin,
    State(state): State<AppState>,
    session: Session,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.connect().await?;
    let stats: DashboardStats = ProductRepo::dashboard_stats(&mut conn).await?;

    tracing::debug!(total = stats.total, "Rendered admin dashboard");
    Ok((admin, Page::new(stats, session.notice)))
}

// ---------------------------------------------------------------------------
// GET /admin/products?q=
// ---------------------------------------------------------------------------

/// All products, or those whose name or brand contains `q`.
pub async fn list_products(
    admin: RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    session: Session,
) -> AppResult<impl IntoResponse> {
    let q = params.text().to_string();
    let mut conn = state.db.connect().await?;
    let products = ProductRepo::search(&mut conn, &q).await?;

    tracing::debug!(%q, count = products.len(), "Listed admin products");
    Ok((admin, Page::new(ProductListView { products, q }, session.notice)))
}

// ---------------------------------------------------------------------------
// GET /admin/products/new
// ---------------------------------------------------------------------------

pub async fn new_form(admin: RequireAdmin, session: Session) -> impl IntoResponse {
    let view = ProductFormView {
        action: NEW_PRODUCT_PATH.to_string(),
        product: None,
    };
    (admin, Page::new(view, session.notice))
}

// ---------------------------------------------------------------------------
// POST /admin/products/new
// ---------------------------------------------------------------------------

/// Insert a product. A blank name sends the browser back to the form.
pub async fn create(
    admin: RequireAdmin,
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> AppResult<Response> {
    let draft = match form.into_new_draft() {
        Ok(draft) => draft,
        Err(CoreError::Validation(reason)) => {
            tracing::info!(%reason, "Rejected product create");
            return Ok(
                (admin, Flash(Notice::NameRequired), Redirect::to(NEW_PRODUCT_PATH))
                    .into_response(),
            );
        }
        Err(other) => return Err(other.into()),
    };

    let mut conn = state.db.connect().await?;
    let created = ProductRepo::create(&mut conn, &draft).await?;

    tracing::info!(id = created.id, name = %created.name, "Product created");
    Ok((admin, Flash(Notice::ProductCreated), Redirect::to(PRODUCTS_PATH)).into_response())
}

// ---------------------------------------------------------------------------
// GET /admin/products/{id}/edit
// ---------------------------------------------------------------------------

pub async fn edit_form(
    admin: RequireAdmin,
    State(state): State<AppState>,
    ProductId(id): ProductId,
    session: Session,
) -> AppResult<Response> {
    let mut conn = state.db.connect().await?;

    let Some(product) = ProductRepo::find_by_id(&mut conn, id).await? else {
        return Ok(not_found(admin, id));
    };

    let view = ProductFormView {
        action: edit_product_path(id),
        product: Some(product),
    };
    Ok((admin, Page::new(view, session.notice)).into_response())
}

// ---------------------------------------------------------------------------
// POST /admin/products/{id}/edit
// ---------------------------------------------------------------------------

/// Apply the submitted fields over the stored product; see
/// [`product::merge`] for which fields win.
pub async fn update(
    admin: RequireAdmin,
    State(state): State<AppState>,
    ProductId(id): ProductId,
    Form(form): Form<ProductForm>,
) -> AppResult<Response> {
    let mut conn = state.db.connect().await?;

    let Some(existing) = ProductRepo::find_by_id(&mut conn, id).await? else {
        return Ok(not_found(admin, id));
    };

    let merged = match product::merge(&existing.to_draft(), &form) {
        Ok(merged) => merged,
        Err(CoreError::Validation(reason)) => {
            tracing::info!(id, %reason, "Rejected product update");
            return Ok((
                admin,
                Flash(Notice::NameRequired),
                Redirect::to(&edit_product_path(id)),
            )
                .into_response());
        }
        Err(other) => return Err(other.into()),
    };

    let Some(updated) = ProductRepo::update(&mut conn, id, &merged).await? else {
        return Ok(not_found(admin, id));
    };

    tracing::info!(id = updated.id, name = %updated.name, "Product updated");
    Ok((admin, Flash(Notice::ProductUpdated), Redirect::to(PRODUCTS_PATH)).into_response())
}

// ---------------------------------------------------------------------------
// POST /admin/products/{id}/delete
// ---------------------------------------------------------------------------

/// Hard delete. Unknown ids are not an error.
pub async fn delete(
    admin: RequireAdmin,
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.connect().await?;
    let deleted = ProductRepo::delete(&mut conn, id).await?;

    tracing::info!(id, deleted, "Product delete requested");
    Ok((admin, Flash(Notice::ProductDeleted), Redirect::to(PRODUCTS_PATH)))
}

fn not_found(admin: RequireAdmin, id: DbId) -> Response {
    tracing::info!(id, "Product not found, redirecting to admin list");
    (admin, Flash(Notice::ProductNotFound), Redirect::to(PRODUCTS_PATH)).into_response()
}
