//! Product entity model and read models.

use serde::Serialize;
use sqlx::FromRow;
use storefront_core::product::ProductDraft;
use storefront_core::types::DbId;

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub brand: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: String,
}

impl Product {
    /// The writable columns, as the merge logic expects them.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            brand: self.brand.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            price: self.price,
            image_url: self.image_url.clone(),
        }
    }
}

/// One slide of the home page carousel.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeroImage {
    pub image_url: Option<String>,
    pub name: String,
}

/// Number of products sharing a `category` value.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Aggregates shown on the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total: i64,
    /// `0.0` on an empty table.
    pub max_price: f64,
    /// `0.0` on an empty table.
    pub avg_price: f64,
    pub by_category: Vec<CategoryCount>,
    pub recent: Vec<Product>,
}
