//! Thread and reply endpoints.

use serde::Serialize;

use super::{http, validation_error, ApiError, ApiResult};
use crate::browse::ThreadOrder;
use crate::models::{Reply, ReplyPage, Thread, ThreadPage};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewThread<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReply<'a> {
    pub body: &'a str,
}

pub async fn page(page: u32, order: ThreadOrder) -> ApiResult<ThreadPage> {
    let resp = http::get(&format!("/threads?page={page}&order={}", order.query_key())).await?;
    match resp.status() {
        200 => http::json(resp).await,
        _ => Err(ApiError::internal()),
    }
}

pub async fn search(term: &str, page: u32) -> ApiResult<Vec<Thread>> {
    let resp = http::get(&format!(
        "/threads/search?q={}&page={page}",
        http::encode(term)
    ))
    .await?;
    match resp.status() {
        200 => http::json(resp).await,
        _ => Err(ApiError::internal()),
    }
}

pub async fn get(id: u64) -> ApiResult<Thread> {
    let resp = http::get(&format!("/threads/{id}")).await?;
    match resp.status() {
        200 => http::json(resp).await,
        404 => Err(ApiError::new("That thread could not be found.")),
        _ => Err(ApiError::internal()),
    }
}

pub async fn create(thread: &NewThread<'_>) -> ApiResult<Thread> {
    let resp = http::post_json("/threads", thread).await?;
    match resp.status() {
        200 | 201 => http::json(resp).await,
        400 => Err(validation_error(
            &http::body_text(resp).await,
            "Please check your thread and try again.",
        )),
        401 | 403 => Err(ApiError::new("You must be logged in to post a thread.")),
        _ => Err(ApiError::internal()),
    }
}

pub async fn like(id: u64) -> ApiResult<()> {
    let resp = http::post(&format!("/threads/{id}/likes")).await?;
    match resp.status() {
        200 | 201 | 204 => Ok(()),
        401 | 403 => Err(ApiError::new("You must be logged in to like a thread.")),
        404 => Err(ApiError::new("That thread could not be found.")),
        _ => Err(ApiError::internal()),
    }
}

pub async fn unlike(id: u64) -> ApiResult<()> {
    let resp = http::delete(&format!("/threads/{id}/likes")).await?;
    match resp.status() {
        200 | 204 => Ok(()),
        401 | 403 => Err(ApiError::new("You must be logged in to like a thread.")),
        404 => Err(ApiError::new("That thread could not be found.")),
        _ => Err(ApiError::internal()),
    }
}

pub async fn hidden_page(page: u32) -> ApiResult<ThreadPage> {
    let resp = http::get(&format!("/threads/hidden?page={page}")).await?;
    match resp.status() {
        200 => http::json(resp).await,
        401 | 403 => Err(ApiError::new("You are not authorized to moderate threads.")),
        _ => Err(ApiError::internal()),
    }
}

pub async fn hide(id: u64) -> ApiResult<()> {
    moderate(&format!("/threads/{id}/hide")).await
}

pub async fn restore(id: u64) -> ApiResult<()> {
    moderate(&format!("/threads/{id}/restore")).await
}

pub async fn delete(id: u64) -> ApiResult<()> {
    let resp = http::delete(&format!("/threads/{id}")).await?;
    match resp.status() {
        200 | 204 => Ok(()),
        401 | 403 => Err(ApiError::new("You are not authorized to moderate threads.")),
        404 => Err(ApiError::new("That thread could not be found.")),
        _ => Err(ApiError::internal()),
    }
}

async fn moderate(path: &str) -> ApiResult<()> {
    let resp = http::post(path).await?;
    match resp.status() {
        200 | 204 => Ok(()),
        401 | 403 => Err(ApiError::new("You are not authorized to moderate threads.")),
        404 => Err(ApiError::new("That thread could not be found.")),
        _ => Err(ApiError::internal()),
    }
}

// ========================
// Replies
// ========================

pub async fn replies_page(thread_id: u64, page: u32) -> ApiResult<ReplyPage> {
    let resp = http::get(&format!("/threads/{thread_id}/replies?page={page}")).await?;
    match resp.status() {
        200 => http::json(resp).await,
        404 => Err(ApiError::new("That thread could not be found.")),
        _ => Err(ApiError::internal()),
    }
}

pub async fn create_reply(thread_id: u64, reply: &NewReply<'_>) -> ApiResult<Reply> {
    let resp = http::post_json(&format!("/threads/{thread_id}/replies"), reply).await?;
    match resp.status() {
        200 | 201 => http::json(resp).await,
        400 => Err(validation_error(
            &http::body_text(resp).await,
            "Please check your reply and try again.",
        )),
        401 | 403 => Err(ApiError::new("You must be logged in to reply.")),
        404 => Err(ApiError::new("That thread could not be found.")),
        _ => Err(ApiError::internal()),
    }
}

pub async fn like_reply(id: u64) -> ApiResult<()> {
    let resp = http::post(&format!("/replies/{id}/likes")).await?;
    match resp.status() {
        200 | 201 | 204 => Ok(()),
        401 | 403 => Err(ApiError::new("You must be logged in to like a reply.")),
        404 => Err(ApiError::new("That reply no longer exists.")),
        _ => Err(ApiError::internal()),
    }
}

pub async fn unlike_reply(id: u64) -> ApiResult<()> {
    let resp = http::delete(&format!("/replies/{id}/likes")).await?;
    match resp.status() {
        200 | 204 => Ok(()),
        401 | 403 => Err(ApiError::new("You must be logged in to like a reply.")),
        404 => Err(ApiError::new("That reply no longer exists.")),
        _ => Err(ApiError::internal()),
    }
}

pub async fn hide_reply(id: u64) -> ApiResult<()> {
    let resp = http::post(&format!("/replies/{id}/hide")).await?;
    match resp.status() {
        200 | 204 => Ok(()),
        401 | 403 => Err(ApiError::new("You are not authorized to moderate replies.")),
        404 => Err(ApiError::new("That reply no longer exists.")),
        _ => Err(ApiError::internal()),
    }
}
