//! User, auth, and profile endpoints.

use serde::{Deserialize, Serialize};

use super::{http, validation_error, ApiError, ApiResult};
use crate::models::{CurrentUser, Profile};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub full_name: &'a str,
    pub email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate<'a> {
    pub full_name: &'a str,
    pub bio: Option<&'a str>,
    pub profile_pic_url: Option<&'a str>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
}

pub async fn register(registration: &Registration<'_>) -> ApiResult<TokenResponse> {
    let resp = http::post_json("/users", registration).await?;
    match resp.status() {
        200 | 201 => http::json(resp).await,
        400 => Err(validation_error(
            &http::body_text(resp).await,
            "Please check your registration details and try again.",
        )),
        409 => Err(ApiError::new("That username is already taken.")),
        429 => Err(ApiError::new(
            "Too many registration attempts. Please wait a moment and try again.",
        )),
        _ => Err(ApiError::internal()),
    }
}

pub async fn login(credentials: &Credentials<'_>) -> ApiResult<TokenResponse> {
    let resp = http::post_json("/auth/login", credentials).await?;
    match resp.status() {
        200 => http::json(resp).await,
        400 => Err(validation_error(
            &http::body_text(resp).await,
            "Please enter a username and password.",
        )),
        401 | 403 => Err(ApiError::new("Incorrect username or password.")),
        _ => Err(ApiError::internal()),
    }
}

pub async fn current() -> ApiResult<CurrentUser> {
    let resp = http::get("/users/me").await?;
    match resp.status() {
        200 => http::json(resp).await,
        401 | 403 => Err(ApiError::new("Your session has expired. Please log in again.")),
        _ => Err(ApiError::internal()),
    }
}

pub async fn profile(username: &str) -> ApiResult<Profile> {
    let resp = http::get(&format!("/users/{}", http::encode(username))).await?;
    match resp.status() {
        200 => http::json(resp).await,
        404 => Err(ApiError::new("No user goes by that name.")),
        _ => Err(ApiError::internal()),
    }
}

pub async fn update_profile(update: &ProfileUpdate<'_>) -> ApiResult<Profile> {
    let resp = http::put_json("/users/me", update).await?;
    match resp.status() {
        200 => http::json(resp).await,
        400 => Err(validation_error(
            &http::body_text(resp).await,
            "Please check your profile details and try again.",
        )),
        401 | 403 => Err(ApiError::new("You must be logged in to edit your profile.")),
        _ => Err(ApiError::internal()),
    }
}
