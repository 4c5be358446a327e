//! Storefront layout constants.
//!
//! Sizes of the panels shown on the home, detail, and admin views, plus the
//! fixed brand navigation.

/// Number of products in the home page grid.
pub const HOME_LATEST_LIMIT: i64 = 12;

/// Number of slides in the home page hero carousel.
pub const HOME_HERO_LIMIT: i64 = 10;

/// Number of products in the home page "most expensive" column.
pub const HOME_TOP_PRICED_LIMIT: i64 = 6;

/// Maximum number of related products shown on a detail page.
pub const RELATED_LIMIT: i64 = 6;

/// Number of recent products listed on the admin dashboard.
pub const DASHBOARD_RECENT_LIMIT: i64 = 5;

/// Brand labels shown in the storefront navigation.
///
/// These match the `brand` column values written by the demo seed, so each
/// entry links to a non-empty brand page on a freshly seeded store.
pub const NAV_BRANDS: &[&str] = &[
    "Asus", "Msi", "gygabyte", "Lenovo", "Dell", "Macbook", "Monitor", "Desktop",
];
