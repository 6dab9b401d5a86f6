//! Agency directory endpoints.

use serde::Serialize;

use super::{http, validation_error, ApiError, ApiResult};
use crate::browse::AgencyOrder;
use crate::models::{Agency, AgencyPage};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAgency<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub phone: Option<&'a str>,
    pub website: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Decision {
    approved: bool,
}

pub async fn page(page: u32, order: AgencyOrder) -> ApiResult<AgencyPage> {
    let resp = http::get(&format!("/agencies?page={page}&order={}", order.query_key())).await?;
    match resp.status() {
        200 => http::json(resp).await,
        _ => Err(ApiError::internal()),
    }
}

pub async fn search(term: &str, page: u32) -> ApiResult<Vec<Agency>> {
    let resp = http::get(&format!(
        "/agencies/search?q={}&page={page}",
        http::encode(term)
    ))
    .await?;
    match resp.status() {
        200 => http::json(resp).await,
        _ => Err(ApiError::internal()),
    }
}

// The backend verifies the street address against an upstream service
// before accepting a listing; 502 is that verification failing.
pub async fn create(agency: &NewAgency<'_>) -> ApiResult<Agency> {
    let resp = http::post_json("/agencies", agency).await?;
    match resp.status() {
        200 | 201 => http::json(resp).await,
        400 => Err(validation_error(
            &http::body_text(resp).await,
            "Please check the agency details and try again.",
        )),
        401 | 403 => Err(ApiError::new("You must be logged in to submit an agency.")),
        502 => Err(ApiError::new(
            "We could not verify that address. Please double-check it and try again.",
        )),
        _ => Err(ApiError::internal()),
    }
}

pub async fn pending_page(page: u32) -> ApiResult<AgencyPage> {
    let resp = http::get(&format!("/agencies/pending?page={page}")).await?;
    match resp.status() {
        200 => http::json(resp).await,
        401 | 403 => Err(ApiError::new("You are not authorized to review agencies.")),
        _ => Err(ApiError::internal()),
    }
}

/// Approve or deny a pending listing; returns the updated agency.
pub async fn decide(id: u64, approved: bool) -> ApiResult<Agency> {
    let resp = http::post_json(&format!("/agencies/{id}/decision"), &Decision { approved }).await?;
    match resp.status() {
        200 => http::json(resp).await,
        401 | 403 => Err(ApiError::new("You are not authorized to review agencies.")),
        404 => Err(ApiError::new("That agency listing no longer exists.")),
        _ => Err(ApiError::internal()),
    }
}
