//! Request id extractor.
//!
//! `SetRequestIdLayer` stamps every request with an `x-request-id`; this
//! extractor hands it to handlers so controller logs can carry it.

use std::convert::Infallible;

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tower_http::request_id::RequestId;
use uuid::Uuid;

/// Header carrying the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// The current request's id.
///
/// Falls back to the raw header, then to a fresh UUID when the request did
/// not pass through the request id layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestIdentity(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RequestIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .extensions
            .get::<RequestId>()
            .and_then(|id| id.header_value().to_str().ok())
            .or_else(|| {
                parts
                    .headers
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
            })
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        Ok(Self(id))
    }
}
