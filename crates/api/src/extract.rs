//! Path extractors for the page routes.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use storefront_core::types::DbId;

use crate::error::AppError;

/// The `{id}` segment of a product URL.
///
/// A segment that is not an `i64` means the URL matches no product page, so
/// it is rejected with 404 rather than axum's default 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for ProductId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<DbId>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(ProductId(id)),
            Err(rejection) => {
                tracing::debug!(
                    path = %parts.uri.path(),
                    error = %rejection,
                    "Rejected product path"
                );
                Err(AppError::NotFound)
            }
        }
    }
}
