//! Storage accessor for the storefront.
//!
//! A single SQLite file holds the `products` table. Every request opens its
//! own connection through [`Database::connect`] and drops it when the handler
//! returns; nothing is pooled or shared between requests.

pub mod models;
pub mod repositories;

use std::path::{Path, PathBuf};

use sqlx::sqlite::{Sqlite, SqliteConnectOptions};
use sqlx::{Connection, QueryBuilder};

pub type DbConnection = sqlx::SqliteConnection;

/// DDL for the only table. Safe to run on every start.
pub const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        brand TEXT NOT NULL,
        description TEXT NOT NULL,
        price REAL NOT NULL,
        image_url TEXT,
        category TEXT NOT NULL
    )
";

/// Handle to the store file. Cheap to clone; holds no open connection.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl Database {
    /// Point at a SQLite file, creating it on first connect if missing.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        Self { path, options }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection. The connection closes when dropped.
    pub async fn connect(&self) -> Result<DbConnection, sqlx::Error> {
        DbConnection::connect_with(&self.options).await
    }
}

/// Create the `products` table if it does not exist yet.
pub async fn ensure_schema(conn: &mut DbConnection) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(&mut *conn).await?;
    Ok(())
}

/// Insert the demo catalog when the table is empty.
///
/// Returns the number of rows written: `0` when products already exist,
/// otherwise the full demo batch. The batch is one multi-row `INSERT`, so it
/// either lands completely or not at all.
pub async fn seed_if_empty(conn: &mut DbConnection) -> Result<u64, sqlx::Error> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&mut *conn)
        .await?;
    if existing > 0 {
        tracing::debug!(existing, "Products table already populated, skipping seed");
        return Ok(0);
    }

    let rows = storefront_core::seed::demo_catalog(&mut rand::rng());

    let mut builder = QueryBuilder::<Sqlite>::new(
        "INSERT INTO products (name, brand, description, price, image_url, category) ",
    );
    builder.push_values(rows, |mut row, draft| {
        row.push_bind(draft.name)
            .push_bind(draft.brand)
            .push_bind(draft.description)
            .push_bind(draft.price)
            .push_bind(draft.image_url)
            .push_bind(draft.category);
    });

    let inserted = builder.build().execute(&mut *conn).await?.rows_affected();
    tracing::info!(inserted, "Seeded demo products");
    Ok(inserted)
}

/// Verify the store answers a trivial query.
pub async fn health_check(conn: &mut DbConnection) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(&mut *conn).await?;
    Ok(())
}

/// Startup routine: ensure the schema exists and optionally seed demo data.
///
/// Returns the number of seeded rows.
pub async fn init(db: &Database, seed: bool) -> Result<u64, sqlx::Error> {
    let mut conn = db.connect().await?;
    ensure_schema(&mut conn).await?;
    tracing::info!(path = %db.path().display(), "Products schema ready");

    if seed {
        seed_if_empty(&mut conn).await
    } else {
        Ok(0)
    }
}
