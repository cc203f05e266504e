//! REST API Bindings
//!
//! Frontend bindings to the platform backend, organized by domain.
//! JSON in and out via serde; multipart submissions via `FormData`.

mod admin;
mod category;
mod course;
mod settings;
mod template;
mod user;

use std::fmt;

use reqwasm::http::{Method, Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

// Re-export all public items
pub use admin::*;
pub use category::*;
pub use course::*;
pub use settings::*;
pub use template::*;
pub use user::*;

/// Backend base URL
pub const BASE_URL: &str = "http://localhost:8000";

pub fn api_url(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

/// Absolute URL for a server-side upload path (images, videos)
pub fn asset_url(path: &str) -> String {
    format!("{BASE_URL}/{path}")
}

/// One failed API call. Server-reported messages are carried verbatim;
/// everything else collapses to a generic transport or decode failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// fetch() itself failed (offline, CORS, DNS)
    Network(String),
    /// Non-2xx response, with the server's `message`/`msg` when present
    Status { status: u16, message: Option<String> },
    /// 2xx response whose body did not match the expected shape
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(detail) => write!(f, "Network error: {detail}"),
            ApiError::Status {
                status,
                message: Some(message),
            } => write!(f, "{message} (status {status})"),
            ApiError::Status { status, .. } => write!(f, "Request failed with status {status}"),
            ApiError::Decode(detail) => write!(f, "Unexpected response shape: {detail}"),
        }
    }
}

impl ApiError {
    /// Message for the status banner: the server's own words when it sent
    /// any, otherwise the caller's generic fallback
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// Pull the error message out of a failed response body:
/// `{ "message": ... }` or `{ "msg": ... }`
async fn error_message(response: &Response) -> Option<String> {
    let body = response.text().await.ok()?;
    let value: serde_json::Value = serde_json::from_str(&body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("msg"))
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}

async fn into_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let message = error_message(&response).await;
        return Err(ApiError::Status { status, message });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

// ========================
// Request Helpers
// ========================

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    into_json(response).await
}

pub(crate) async fn get_json_auth<T: DeserializeOwned>(
    path: &str,
    token: &str,
) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    into_json(response).await
}

pub(crate) async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let payload = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let mut request = Request::new(&api_url(path))
        .method(method)
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        request = request.header("Authorization", &bearer(token));
    }
    let response = request
        .body(payload)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    into_json(response).await
}

/// Multipart submission. The browser supplies the boundary header itself;
/// setting Content-Type here would break the request.
pub(crate) async fn send_form<T: DeserializeOwned>(
    method: Method,
    path: &str,
    form: web_sys::FormData,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let mut request = Request::new(&api_url(path)).method(method);
    if let Some(token) = token {
        request = request.header("Authorization", &bearer(token));
    }
    let response = request
        .body(form)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    into_json(response).await
}

pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
    let response = Request::new(&api_url(path))
        .method(Method::DELETE)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        let status = response.status();
        let message = error_message(&response).await;
        return Err(ApiError::Status { status, message });
    }
    Ok(())
}
