//! Repository for the `products` table.

use storefront_core::catalog::DASHBOARD_RECENT_LIMIT;
use storefront_core::product::ProductDraft;
use storefront_core::types::DbId;

use crate::models::product::{CategoryCount, DashboardStats, HeroImage, Product};
use crate::DbConnection;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, brand, description, price, image_url, category";

/// Catalog queries and admin statements for products.
pub struct ProductRepo;

impl ProductRepo {
    // -- catalog reads --------------------------------------------------------

    /// Most recently created products first.
    pub async fn list_latest(
        conn: &mut DbConnection,
        limit: i64,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id DESC LIMIT ?");
        sqlx::query_as::<_, Product>(&query)
            .bind(limit)
            .fetch_all(&mut *conn)
            .await
    }

    /// Image and name of the most recent products, for the hero carousel.
    pub async fn list_hero_images(
        conn: &mut DbConnection,
        limit: i64,
    ) -> Result<Vec<HeroImage>, sqlx::Error> {
        sqlx::query_as::<_, HeroImage>(
            "SELECT image_url, name FROM products ORDER BY id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&mut *conn)
        .await
    }

    /// Most expensive products first.
    pub async fn list_top_priced(
        conn: &mut DbConnection,
        limit: i64,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY price DESC LIMIT ?");
        sqlx::query_as::<_, Product>(&query)
            .bind(limit)
            .fetch_all(&mut *conn)
            .await
    }

    /// Every product whose brand equals `brand` exactly, newest first.
    pub async fn list_by_brand(
        conn: &mut DbConnection,
        brand: &str,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE brand = ? ORDER BY id DESC");
        sqlx::query_as::<_, Product>(&query)
            .bind(brand)
            .fetch_all(&mut *conn)
            .await
    }

    /// Find a product by id.
    pub async fn find_by_id(
        conn: &mut DbConnection,
        id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = ?");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Other products of the same brand. Order is whatever the store returns.
    pub async fn list_related(
        conn: &mut DbConnection,
        brand: &str,
        excluding_id: DbId,
        limit: i64,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE brand = ? AND id != ? LIMIT ?");
        sqlx::query_as::<_, Product>(&query)
            .bind(brand)
            .bind(excluding_id)
            .bind(limit)
            .fetch_all(&mut *conn)
            .await
    }

    // -- admin ----------------------------------------------------------------

    /// Admin listing. A blank query returns every product; otherwise matches
    /// `query` as a case-insensitive substring of `name` or `brand`. Newest
    /// first either way.
    pub async fn search(
        conn: &mut DbConnection,
        query: &str,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = query.trim();
        if query.is_empty() {
            let sql = format!("SELECT {COLUMNS} FROM products ORDER BY id DESC");
            return sqlx::query_as::<_, Product>(&sql).fetch_all(&mut *conn).await;
        }

        let pattern = like_pattern(query);
        let sql = format!(
            "SELECT {COLUMNS} FROM products
             WHERE name LIKE ? ESCAPE '\\' OR brand LIKE ? ESCAPE '\\'
             ORDER BY id DESC"
        );
        sqlx::query_as::<_, Product>(&sql)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(&mut *conn)
            .await
    }

    /// Insert a new product, returning the created row.
    pub async fn create(
        conn: &mut DbConnection,
        input: &ProductDraft,
    ) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, brand, category, price, description, image_url)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.brand)
            .bind(&input.category)
            .bind(input.price)
            .bind(&input.description)
            .bind(&input.image_url)
            .fetch_one(&mut *conn)
            .await
    }

    /// Overwrite every writable column of a product.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut DbConnection,
        id: DbId,
        input: &ProductDraft,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = ?, brand = ?, category = ?, price = ?, description = ?, image_url = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.brand)
            .bind(&input.category)
            .bind(input.price)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Permanently delete a product. Returns `true` if a row was removed;
    /// deleting an unknown id is not an error.
    pub async fn delete(conn: &mut DbConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of products.
    pub async fn count(conn: &mut DbConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&mut *conn)
            .await
    }

    /// Product count per `category`, ordered by category label.
    pub async fn count_by_category(
        conn: &mut DbConnection,
    ) -> Result<Vec<CategoryCount>, sqlx::Error> {
        sqlx::query_as::<_, CategoryCount>(
            "SELECT category, COUNT(*) AS count FROM products
             GROUP BY category
             ORDER BY category",
        )
        .fetch_all(&mut *conn)
        .await
    }

    /// Everything the admin dashboard shows.
    pub async fn dashboard_stats(conn: &mut DbConnection) -> Result<DashboardStats, sqlx::Error> {
        let total = Self::count(conn).await?;

        let (max_price, avg_price): (Option<f64>, Option<f64>) =
            sqlx::query_as("SELECT MAX(price), AVG(price) FROM products")
                .fetch_one(&mut *conn)
                .await?;

        let by_category = Self::count_by_category(conn).await?;
        let recent = Self::list_latest(conn, DASHBOARD_RECENT_LIMIT).await?;

        Ok(DashboardStats {
            total,
            max_price: max_price.unwrap_or(0.0),
            avg_price: avg_price.unwrap_or(0.0),
            by_category,
            recent,
        })
    }
}

/// Wrap `query` in `%` wildcards, escaping `LIKE` metacharacters so the
/// match is a literal substring.
fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
