//! Shared query parameter types for page handlers.

use serde::Deserialize;

/// Admin product search (`?q=`). A missing and an empty `q` behave the same.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    /// The trimmed search text, empty when absent.
    pub fn text(&self) -> &str {
        self.q.as_deref().map(str::trim).unwrap_or_default()
    }
}
