//! Request plumbing shared by the endpoint wrappers.

use gloo_net::http::{Request, RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ApiError, ApiResult};
use crate::session;

const API_BASE: &str = "/api";

fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Percent-encode one query-string value.
pub(super) fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

// The bearer header is attached only when a token exists. The previous
// client sent `Authorization: Bearer null` for logged-out visitors.
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match session::stored_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

pub(super) async fn get(path: &str) -> Result<Response, ApiError> {
    authorize(Request::get(&endpoint(path)))
        .send()
        .await
        .map_err(|_| ApiError::internal())
}

pub(super) async fn post(path: &str) -> Result<Response, ApiError> {
    authorize(Request::post(&endpoint(path)))
        .send()
        .await
        .map_err(|_| ApiError::internal())
}

pub(super) async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<Response, ApiError> {
    authorize(Request::post(&endpoint(path)))
        .json(body)
        .map_err(|_| ApiError::internal())?
        .send()
        .await
        .map_err(|_| ApiError::internal())
}

pub(super) async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<Response, ApiError> {
    authorize(Request::put(&endpoint(path)))
        .json(body)
        .map_err(|_| ApiError::internal())?
        .send()
        .await
        .map_err(|_| ApiError::internal())
}

pub(super) async fn delete(path: &str) -> Result<Response, ApiError> {
    authorize(Request::delete(&endpoint(path)))
        .send()
        .await
        .map_err(|_| ApiError::internal())
}

pub(super) async fn json<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    resp.json::<T>().await.map_err(|_| ApiError::internal())
}

pub(super) async fn body_text(resp: Response) -> String {
    resp.text().await.unwrap_or_default()
}
