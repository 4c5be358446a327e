//! Shared response envelope for page handlers.
//!
//! Page handlers return a [`Page`], which serializes as
//! `{ "data": ..., "notice": ... }` and clears the flash cookie it displays.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::session::{ConsumeNotice, Notice, NoticeView};

/// A rendered view plus the pending flash notice, if any.
#[derive(Debug)]
pub struct Page<T> {
    pub data: T,
    pub notice: Option<Notice>,
}

impl<T> Page<T> {
    pub fn new(data: T, notice: Option<Notice>) -> Self {
        Self { data, notice }
    }
}

#[derive(Serialize)]
struct PageBody<'a, T> {
    data: &'a T,
    notice: Option<NoticeView>,
}

impl<T: Serialize> IntoResponse for Page<T> {
    fn into_response(self) -> Response {
        let body = PageBody {
            data: &self.data,
            notice: self.notice.map(Notice::view),
        };
        let consumed = self.notice.map(|_| ConsumeNotice);
        (consumed, Json(body)).into_response()
    }
}
