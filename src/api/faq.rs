//! FAQ endpoints.

use serde::Serialize;

use super::{http, validation_error, ApiError, ApiResult};
use crate::models::{Faq, FaqPage};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFaq<'a> {
    pub question: &'a str,
    pub answer: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Decision {
    approved: bool,
}

pub async fn page(page: u32) -> ApiResult<FaqPage> {
    let resp = http::get(&format!("/faqs?page={page}")).await?;
    match resp.status() {
        200 => http::json(resp).await,
        _ => Err(ApiError::internal()),
    }
}

pub async fn search(term: &str, page: u32) -> ApiResult<Vec<Faq>> {
    let resp = http::get(&format!("/faqs/search?q={}&page={page}", http::encode(term))).await?;
    match resp.status() {
        200 => http::json(resp).await,
        _ => Err(ApiError::internal()),
    }
}

pub async fn create(faq: &NewFaq<'_>) -> ApiResult<Faq> {
    let resp = http::post_json("/faqs", faq).await?;
    match resp.status() {
        200 | 201 => http::json(resp).await,
        400 => Err(validation_error(
            &http::body_text(resp).await,
            "Please check the question and answer and try again.",
        )),
        401 | 403 => Err(ApiError::new("Only FAQ authors can submit FAQ entries.")),
        _ => Err(ApiError::internal()),
    }
}

pub async fn pending_page(page: u32) -> ApiResult<FaqPage> {
    let resp = http::get(&format!("/faqs/pending?page={page}")).await?;
    match resp.status() {
        200 => http::json(resp).await,
        401 | 403 => Err(ApiError::new("You are not authorized to review FAQs.")),
        _ => Err(ApiError::internal()),
    }
}

pub async fn decide(id: u64, approved: bool) -> ApiResult<()> {
    let resp = http::post_json(&format!("/faqs/{id}/decision"), &Decision { approved }).await?;
    match resp.status() {
        200 | 204 => Ok(()),
        401 | 403 => Err(ApiError::new("You are not authorized to review FAQs.")),
        404 => Err(ApiError::new("That FAQ entry no longer exists.")),
        _ => Err(ApiError::internal()),
    }
}

pub async fn hidden_page(page: u32) -> ApiResult<FaqPage> {
    let resp = http::get(&format!("/faqs/hidden?page={page}")).await?;
    match resp.status() {
        200 => http::json(resp).await,
        401 | 403 => Err(ApiError::new("You are not authorized to moderate FAQs.")),
        _ => Err(ApiError::internal()),
    }
}

pub async fn hide(id: u64) -> ApiResult<()> {
    moderate(&format!("/faqs/{id}/hide")).await
}

pub async fn restore(id: u64) -> ApiResult<()> {
    moderate(&format!("/faqs/{id}/restore")).await
}

pub async fn delete(id: u64) -> ApiResult<()> {
    let resp = http::delete(&format!("/faqs/{id}")).await?;
    match resp.status() {
        200 | 204 => Ok(()),
        401 | 403 => Err(ApiError::new("You are not authorized to moderate FAQs.")),
        404 => Err(ApiError::new("That FAQ entry no longer exists.")),
        _ => Err(ApiError::internal()),
    }
}

async fn moderate(path: &str) -> ApiResult<()> {
    let resp = http::post(path).await?;
    match resp.status() {
        200 | 204 => Ok(()),
        401 | 403 => Err(ApiError::new("You are not authorized to moderate FAQs.")),
        404 => Err(ApiError::new("That FAQ entry no longer exists.")),
        _ => Err(ApiError::internal()),
    }
}
