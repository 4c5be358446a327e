//! Product form normalization and the partial-update merge.
//!
//! The admin create and edit forms post the same six fields. Create trims
//! everything and coerces the price to `0.0` when it is missing or invalid.
//! Edit treats each non-empty submitted field as an override and keeps the
//! stored value for the rest, see [`merge`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Message shown when a create or edit leaves the product without a name.
pub const NAME_REQUIRED: &str = "Name is required.";

/// Raw admin form submission. Browsers omit unset fields, so all are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<String>,
}

/// The writable columns of a product row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDraft {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
}

impl ProductForm {
    /// Normalize a create submission into a draft ready for insertion.
    ///
    /// Text fields are trimmed, an empty image URL becomes `None`, and an
    /// empty or unparseable price becomes `0.0`. Fails only when the trimmed
    /// name is empty.
    pub fn into_new_draft(self) -> Result<ProductDraft, CoreError> {
        let name = trimmed(self.name);
        validate_name(&name)?;

        Ok(ProductDraft {
            name,
            brand: trimmed(self.brand),
            category: trimmed(self.category),
            description: trimmed(self.description),
            price: self.price.as_deref().and_then(parse_price).unwrap_or(0.0),
            image_url: non_empty(trimmed(self.image_url)),
        })
    }
}

/// Merge an edit submission over the stored product.
///
/// A field overrides the stored value only when it was submitted as a
/// non-empty string; the override is trimmed. Omitted or empty fields keep
/// the stored value untouched. A submitted price that fails to parse also
/// keeps the stored price.
pub fn merge(existing: &ProductDraft, form: &ProductForm) -> Result<ProductDraft, CoreError> {
    let text = |field: &Option<String>, current: &str| {
        submitted(field).map_or_else(|| current.to_owned(), |v| v.trim().to_owned())
    };

    let image_url = match submitted(&form.image_url) {
        Some(url) => non_empty(url.trim().to_owned()),
        None => existing.image_url.clone(),
    };

    let merged = ProductDraft {
        name: text(&form.name, &existing.name),
        brand: text(&form.brand, &existing.brand),
        category: text(&form.category, &existing.category),
        description: text(&form.description, &existing.description),
        price: submitted(&form.price)
            .and_then(parse_price)
            .unwrap_or(existing.price),
        image_url,
    };

    validate_name(&merged.name)?;
    Ok(merged)
}

/// Parse a submitted price.
///
/// Surrounding whitespace is ignored. Returns `None` for empty input, text
/// that is not a number, and negative or non-finite values.
pub fn parse_price(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}

/// Reject an empty product name.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation(NAME_REQUIRED.to_string()));
    }
    Ok(())
}

fn submitted(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn trimmed(field: Option<String>) -> String {
    field.as_deref().map(str::trim).unwrap_or_default().to_owned()
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
