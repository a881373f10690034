use std::borrow::Cow;

use http::header::*;
use http::{response, Response, StatusCode};

pub type ProtocolResult = anyhow::Result<Response<Cow<'static, [u8]>>>;

#[inline]
pub fn base() -> response::Builder {
    Response::builder()
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(ACCESS_CONTROL_ALLOW_HEADERS, "*")
        .header(ACCESS_CONTROL_ALLOW_METHODS, "*")
}

#[inline]
pub fn empty() -> ProtocolResult {
    base()
        .status(StatusCode::OK)
        .body(Cow::Borrowed(&[][..]))
        .map_err(Into::into)
}

#[inline]
pub fn json(json: &impl serde::Serialize) -> ProtocolResult {
    base()
        .header(CONTENT_TYPE, "application/json")
        .status(StatusCode::OK)
        .body(serde_json::to_vec(json)?.into())
        .map_err(Into::into)
}

/// A `text/plain` response carrying `message`.
///
/// Falls back to a bare response of the same status if building fails,
/// so callers always have something to hand back to the webview.
pub fn error(status: StatusCode, message: impl Into<String>) -> Response<Cow<'static, [u8]>> {
    let body: Cow<'static, [u8]> = Cow::Owned(message.into().into_bytes());
    base()
        .header(CONTENT_TYPE, "text/plain")
        .status(status)
        .body(body.clone())
        .unwrap_or_else(|_| {
            let mut res = Response::new(body);
            *res.status_mut() = status;
            res
        })
}
