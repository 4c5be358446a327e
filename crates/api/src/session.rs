//! Cookie-backed session state.
//!
//! Two cookies make up the whole session:
//!
//! - `storefront_admin=1` once the admin gate has let the browser in.
//! - `storefront_notice=<code>` carrying a one-shot [`Notice`] across a
//!   redirect. The next rendered page reports it and clears the cookie.
//!
//! Reading happens through the [`Session`] extractor; writing happens through
//! the [`Flash`], [`GrantAdmin`], [`ConsumeNotice`], and [`ClearSession`]
//! response parts.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponseParts, ResponseParts};
use serde::Serialize;

pub const ADMIN_COOKIE: &str = "storefront_admin";
pub const NOTICE_COOKIE: &str = "storefront_notice";

/// Severity shown next to a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
}

/// Short message carried to the next rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ProductNotFound,
    NameRequired,
    ProductCreated,
    ProductUpdated,
    ProductDeleted,
    SignedOut,
}

/// Serialized form of a [`Notice`] inside a page body.
#[derive(Debug, Clone, Serialize)]
pub struct NoticeView {
    pub level: NoticeLevel,
    pub message: &'static str,
}

impl Notice {
    const ALL: [Notice; 6] = [
        Notice::ProductNotFound,
        Notice::NameRequired,
        Notice::ProductCreated,
        Notice::ProductUpdated,
        Notice::ProductDeleted,
        Notice::SignedOut,
    ];

    /// Cookie-safe identifier.
    pub fn code(self) -> &'static str {
        match self {
            Notice::ProductNotFound => "product_not_found",
            Notice::NameRequired => "name_required",
            Notice::ProductCreated => "product_created",
            Notice::ProductUpdated => "product_updated",
            Notice::ProductDeleted => "product_deleted",
            Notice::SignedOut => "signed_out",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|notice| notice.code() == code)
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::ProductNotFound => "Product not found",
            Notice::NameRequired => storefront_core::product::NAME_REQUIRED,
            Notice::ProductCreated => "Product created.",
            Notice::ProductUpdated => "Product updated.",
            Notice::ProductDeleted => "Product deleted",
            Notice::SignedOut => "Signed out.",
        }
    }

    pub fn level(self) -> NoticeLevel {
        match self {
            Notice::ProductNotFound | Notice::NameRequired => NoticeLevel::Warning,
            Notice::ProductCreated | Notice::ProductUpdated => NoticeLevel::Success,
            Notice::ProductDeleted | Notice::SignedOut => NoticeLevel::Info,
        }
    }

    pub fn view(self) -> NoticeView {
        NoticeView {
            level: self.level(),
            message: self.message(),
        }
    }
}

/// Session state read from the request cookies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub is_admin: bool,
    /// Pending flash notice, if the previous response left one.
    pub notice: Option<Notice>,
}

impl Session {
    /// Parse every `Cookie` header. Unknown cookies and unknown notice codes
    /// are ignored.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut session = Session::default();

        let pairs = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|header| header.split(';'))
            .filter_map(|pair| pair.split_once('='));

        for (name, value) in pairs {
            match name.trim() {
                ADMIN_COOKIE => session.is_admin = value.trim() == "1",
                NOTICE_COOKIE => session.notice = Notice::from_code(value.trim()),
                _ => {}
            }
        }

        session
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Session::from_headers(&parts.headers))
    }
}

/// Leave a notice for the next rendered page.
#[derive(Debug, Clone, Copy)]
pub struct Flash(pub Notice);

impl IntoResponseParts for Flash {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        append_cookie(&mut res, session_cookie(NOTICE_COOKIE, self.0.code()));
        Ok(res)
    }
}

/// Set the admin flag.
#[derive(Debug, Clone, Copy)]
pub struct GrantAdmin;

impl IntoResponseParts for GrantAdmin {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        append_cookie(&mut res, session_cookie(ADMIN_COOKIE, "1"));
        Ok(res)
    }
}

/// Drop the notice that the current page is displaying.
#[derive(Debug, Clone, Copy)]
pub struct ConsumeNotice;

impl IntoResponseParts for ConsumeNotice {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        append_cookie(&mut res, expired_cookie(NOTICE_COOKIE));
        Ok(res)
    }
}

/// Clear the admin flag. Pair with [`Flash`] to announce the sign-out; the
/// notice cookie is left to it.
#[derive(Debug, Clone, Copy)]
pub struct ClearSession;

impl IntoResponseParts for ClearSession {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        append_cookie(&mut res, expired_cookie(ADMIN_COOKIE));
        Ok(res)
    }
}

fn session_cookie(name: &str, value: &str) -> String {
    format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax")
}

fn expired_cookie(name: &str) -> String {
    format!("{name}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

fn append_cookie(res: &mut ResponseParts, cookie: String) {
    match HeaderValue::try_from(cookie) {
        Ok(value) => {
            res.headers_mut().append(SET_COOKIE, value);
        }
        Err(err) => tracing::warn!(error = %err, "Dropping malformed session cookie"),
    }
}
