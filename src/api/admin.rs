//! Admin Account Endpoints
//!
//! Bearer-authenticated profile and password management, plus the
//! dashboard's notification broadcast.

use reqwasm::http::Method;
use serde::Serialize;

use super::{get_json_auth, send_json, ApiError};
use crate::models::{AdminProfile, ProfileResponse, ProfileUpdateResponse};

#[derive(Serialize)]
struct ChangePasswordPayload<'a> {
    #[serde(rename = "newPassword")]
    new_password: &'a str,
    #[serde(rename = "confirmPassword")]
    confirm_password: &'a str,
}

#[derive(Serialize)]
struct NotificationPayload<'a> {
    title: &'a str,
    message: &'a str,
}

pub async fn fetch_profile(token: &str) -> Result<AdminProfile, ApiError> {
    let response: ProfileResponse = get_json_auth("/api/admin/profile", token).await?;
    response
        .data
        .ok_or_else(|| ApiError::Decode("profile payload missing".to_string()))
}

/// Update the profile. The server may rotate the bearer token; the caller
/// is responsible for persisting a returned `accessToken`.
pub async fn update_profile(
    token: &str,
    profile: &AdminProfile,
) -> Result<ProfileUpdateResponse, ApiError> {
    send_json(Method::PUT, "/api/admin/profile", profile, Some(token)).await
}

pub async fn change_password(
    token: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<(), ApiError> {
    let _: serde_json::Value = send_json(
        Method::PUT,
        "/api/admin/change-password",
        &ChangePasswordPayload {
            new_password,
            confirm_password,
        },
        Some(token),
    )
    .await?;
    Ok(())
}

/// Broadcast a push notification to all users
pub async fn send_notification(title: &str, message: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = send_json(
        Method::POST,
        "/api/notification/add",
        &NotificationPayload { title, message },
        None,
    )
    .await?;
    Ok(())
}
