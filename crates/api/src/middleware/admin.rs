//! Admin gate extractor.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponseParts, ResponseParts};
use storefront_core::error::CoreError;

use crate::auth::Access;
use crate::error::AppError;
use crate::session::{GrantAdmin, Session};
use crate::state::AppState;

/// Guards an admin handler. Rejects with 403 Forbidden when the authorizer
/// denies the session.
///
/// Return it as the first element of the response tuple so a newly granted
/// session gets its admin cookie:
///
/// ```ignore
/// async fn dashboard(admin: RequireAdmin) -> AppResult<impl IntoResponse> {
///     Ok((admin, Json(())))
/// }
/// ```
#[derive(Debug)]
pub struct RequireAdmin {
    newly_granted: bool,
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_headers(&parts.headers);

        match state.authorizer.check(&session) {
            Access::Allow => {
                if !session.is_admin {
                    tracing::debug!("Granting admin session");
                }
                Ok(RequireAdmin {
                    newly_granted: !session.is_admin,
                })
            }
            Access::Deny => {
                tracing::warn!(path = %parts.uri.path(), "Admin access denied");
                Err(AppError::Core(CoreError::Forbidden(
                    "Admin access required".into(),
                )))
            }
        }
    }
}

impl IntoResponseParts for RequireAdmin {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if self.newly_granted {
            GrantAdmin.into_response_parts(res)
        } else {
            Ok(res)
        }
    }
}
