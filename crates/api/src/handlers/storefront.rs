//! Public catalog pages: home, brand listing, and product detail.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;
use storefront_core::catalog::{
    HOME_HERO_LIMIT, HOME_LATEST_LIMIT, HOME_TOP_PRICED_LIMIT, NAV_BRANDS, RELATED_LIMIT,
};
use storefront_db::models::product::{HeroImage, Product};
use storefront_db::repositories::ProductRepo;

use crate::error::AppResult;
use crate::extract::ProductId;
use crate::response::Page;
use crate::session::{Flash, Notice, Session};
use crate::state::AppState;

/// Home and brand pages share one layout.
///
/// Brand pages carry no hero images and omit the "most expensive" column
/// entirely, which is how the layout tells the two apart.
#[derive(Debug, Serialize)]
pub struct CatalogView {
    pub products: Vec<Product>,
    pub hero_images: Vec<HeroImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_expensive: Option<Vec<Product>>,
    pub brands: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_brand: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductDetailView {
    pub product: Product,
    pub related: Vec<Product>,
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Latest products, hero carousel, and the most expensive column.
pub async fn home(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Page<CatalogView>> {
    let mut conn = state.db.connect().await?;

    let products = ProductRepo::list_latest(&mut conn, HOME_LATEST_LIMIT).await?;
    let hero_images = ProductRepo::list_hero_images(&mut conn, HOME_HERO_LIMIT).await?;
    let most_expensive = ProductRepo::list_top_priced(&mut conn, HOME_TOP_PRICED_LIMIT).await?;

    tracing::debug!(count = products.len(), "Rendered home page");
    Ok(Page::new(
        CatalogView {
            products,
            hero_images,
            most_expensive: Some(most_expensive),
            brands: NAV_BRANDS,
            current_brand: None,
        },
        session.notice,
    ))
}

// ---------------------------------------------------------------------------
// GET /brand/{brand}
// ---------------------------------------------------------------------------

/// Every product of one brand, newest first.
pub async fn by_brand(
    State(state): State<AppState>,
    Path(brand): Path<String>,
    session: Session,
) -> AppResult<Page<CatalogView>> {
    let mut conn = state.db.connect().await?;
    let products = ProductRepo::list_by_brand(&mut conn, &brand).await?;

    tracing::debug!(%brand, count = products.len(), "Rendered brand page");
    Ok(Page::new(
        CatalogView {
            products,
            hero_images: Vec::new(),
            most_expensive: None,
            brands: NAV_BRANDS,
            current_brand: Some(brand),
        },
        session.notice,
    ))
}

// ---------------------------------------------------------------------------
// GET /product/{id}
// ---------------------------------------------------------------------------

/// One product plus up to six others of the same brand. Unknown ids redirect
/// home with a warning.
pub async fn detail(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    session: Session,
) -> AppResult<Response> {
    let mut conn = state.db.connect().await?;

    let Some(product) = ProductRepo::find_by_id(&mut conn, id).await? else {
        tracing::info!(id, "Product not found, redirecting home");
        return Ok((Flash(Notice::ProductNotFound), Redirect::to("/")).into_response());
    };

    let related =
        ProductRepo::list_related(&mut conn, &product.brand, product.id, RELATED_LIMIT).await?;

    Ok(Page::new(ProductDetailView { product, related }, session.notice).into_response())
}
