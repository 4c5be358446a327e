//! Demo catalog generator.
//!
//! Produces the 80 products written to an empty store on first run: ten
//! models for each of eight brands. Descriptions depend on the brand kind and
//! prices are drawn uniformly from a per-kind range, so two runs never yield
//! the same prices.

use rand::Rng;

use crate::product::ProductDraft;

/// Number of models generated per brand.
pub const MODELS_PER_BRAND: u32 = 10;

/// `(key, label)` pairs. The key selects the description template and price
/// range; the label is what gets stored in `brand` and `category`.
pub const SEED_BRANDS: &[(&str, &str)] = &[
    ("Asus", "Asus"),
    ("Msi", "Msi"),
    ("gygabyte", "gygabyte"),
    ("Lenovo", "Lenovo"),
    ("Dell", "Dell"),
    ("Macbook", "Macbook"),
    ("monitor", "Monitor"),
    ("Desktop", "Desktop"),
];

const PLACEHOLDER_IMAGE_BASE: &str = "https://via.placeholder.com/640x480?text=";

/// What kind of hardware a seed brand sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandKind {
    Laptop,
    Desktop,
    Monitor,
}

impl BrandKind {
    /// Classify a seed brand key (case-insensitive).
    pub fn from_key(key: &str) -> Self {
        match key.to_lowercase().as_str() {
            "desktop" => Self::Desktop,
            "monitor" => Self::Monitor,
            _ => Self::Laptop,
        }
    }

    /// Inclusive price range in dollars.
    pub fn price_range(self) -> (f64, f64) {
        match self {
            Self::Monitor => (99.0, 799.0),
            Self::Laptop | Self::Desktop => (399.0, 2499.0),
        }
    }

    fn description(self, label: &str, model: u32) -> String {
        match self {
            Self::Laptop => format!(
                "{label} performance laptop {model} with 12-core CPU, 16GB RAM, 512GB SSD. \
                 Great for creators and gamers."
            ),
            Self::Desktop => format!(
                "{label} tower PC {model} with Ryzen/Intel options, 16-64GB RAM, NVMe storage."
            ),
            Self::Monitor => format!("{label} {model} 27-inch 144Hz IPS display with HDR."),
        }
    }
}

/// Generate the full demo catalog, brand by brand, models `1..=10`.
pub fn demo_catalog<R: Rng>(rng: &mut R) -> Vec<ProductDraft> {
    let mut rows = Vec::with_capacity(SEED_BRANDS.len() * MODELS_PER_BRAND as usize);

    for &(key, label) in SEED_BRANDS {
        let kind = BrandKind::from_key(key);
        let (low, high) = kind.price_range();

        for model in 1..=MODELS_PER_BRAND {
            rows.push(ProductDraft {
                name: format!("{label} Model {model}"),
                brand: label.to_string(),
                category: label.to_string(),
                description: kind.description(label, model),
                price: round_cents(rng.random_range(low..=high)),
                image_url: Some(placeholder_image_url(&format!("{label}+{model}"))),
            });
        }
    }

    rows
}

/// Placeholder image URL with `text` form-encoded into the query string.
pub fn placeholder_image_url(text: &str) -> String {
    format!("{PLACEHOLDER_IMAGE_BASE}{}", form_encode(text))
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `application/x-www-form-urlencoded` encoding: unreserved bytes pass
/// through, spaces become `+`, everything else is percent-encoded.
fn form_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}
