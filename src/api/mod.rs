//! REST API Client
//!
//! Thin wrapper over the schedule backend (base path `/api`), organized
//! by domain. Every failure — non-2xx status, network error, undecodable
//! body — is normalized to one [`ApiError`], logged, surfaced to the
//! user with a blocking alert, and returned to the caller. One attempt
//! per call: no retry, no timeout.

mod activity;
mod calendar;
mod event;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

// Re-export all public items
pub use activity::*;
pub use calendar::*;
pub use event::*;

const API_BASE: &str = "/api";

/// One error kind for every way a backend call can fail
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API错误: {0}")]
    Status(u16),
    #[error("网络请求失败: {0}")]
    Network(String),
    #[error("响应解析失败: {0}")]
    Decode(String),
}

fn url(endpoint: &str) -> String {
    format!("{}{}", API_BASE, endpoint)
}

/// Report a failed call: diagnostic log plus one blocking alert.
fn report(endpoint: &str, err: &ApiError) {
    web_sys::console::error_1(&format!("[API] {} 调用失败: {}", endpoint, err).into());
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(&format!("操作失败: {}", err));
    }
}

async fn send_json<T: DeserializeOwned>(
    endpoint: &str,
    request: Result<Request, gloo_net::Error>,
) -> Result<T, ApiError> {
    let result = async {
        let response = request
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    .await;

    if let Err(err) = &result {
        report(endpoint, err);
    }
    result
}

// ========================
// Request helpers
// ========================

pub(crate) async fn get_json<T: DeserializeOwned>(endpoint: &str) -> Result<T, ApiError> {
    send_json(endpoint, Request::get(&url(endpoint)).build()).await
}

pub(crate) async fn post_json<T, B>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    send_json(endpoint, Request::post(&url(endpoint)).json(body)).await
}

pub(crate) async fn put_json<T, B>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    send_json(endpoint, Request::put(&url(endpoint)).json(body)).await
}

pub(crate) async fn delete_json<T: DeserializeOwned>(endpoint: &str) -> Result<T, ApiError> {
    send_json(endpoint, Request::delete(&url(endpoint)).build()).await
}
