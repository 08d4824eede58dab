//! Authenticated JSON and multipart requests.
//!
//! Every call sends the stored access token, issues exactly one request and
//! normalizes a failure into [`ApiError`] with caller-supplied fallback texts.

use super::endpoints::Endpoint;
use crate::shared::config::api_base;
use crate::system::auth::storage;
use contracts::shared::api_error::{ApiError, ErrorFallback};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

const TRANSPORT_FAILURE: &str = "Unable to reach the server";

pub fn url(endpoint: Endpoint) -> String {
    endpoint.url(api_base())
}

pub fn url_with(endpoint: Endpoint, suffix: &str) -> String {
    endpoint.url_with(api_base(), suffix)
}

fn authorized(builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
    let token = storage::get_access_token().ok_or_else(ApiError::not_authenticated)?;
    Ok(builder.header("Authorization", &format!("Bearer {}", token)))
}

async fn read<T: DeserializeOwned>(
    response: Response,
    fallback: ErrorFallback,
) -> Result<T, ApiError> {
    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        let err = ApiError::from_response_text(&text, fallback);
        log::warn!(
            "{} {} failed: {} ({})",
            response.status(),
            response.url(),
            err.message,
            err.resolution
        );
        return Err(err);
    }
    response.json::<T>().await.map_err(ApiError::decode)
}

async fn send(request: Request, fallback: ErrorFallback) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| {
        log::error!("{}: {}", fallback.message, e);
        ApiError::transport(TRANSPORT_FAILURE, e)
    })
}

pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    fallback: ErrorFallback,
) -> Result<T, ApiError> {
    let request = authorized(Request::get(url))?
        .build()
        .map_err(|e| ApiError::transport(TRANSPORT_FAILURE, e))?;
    read(send(request, fallback).await?, fallback).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
    fallback: ErrorFallback,
) -> Result<T, ApiError> {
    let request = authorized(Request::post(url))?
        .json(body)
        .map_err(ApiError::decode)?;
    read(send(request, fallback).await?, fallback).await
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
    fallback: ErrorFallback,
) -> Result<T, ApiError> {
    let request = authorized(Request::patch(url))?
        .json(body)
        .map_err(ApiError::decode)?;
    read(send(request, fallback).await?, fallback).await
}

/// Multipart upload with a single `file` field. No file, no request.
pub async fn post_file<T: DeserializeOwned>(
    url: &str,
    file: Option<web_sys::File>,
    fallback: ErrorFallback,
) -> Result<T, ApiError> {
    let file = file.ok_or_else(ApiError::no_file)?;
    let form = web_sys::FormData::new()
        .map_err(|e| ApiError::transport(TRANSPORT_FAILURE, format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| ApiError::transport(TRANSPORT_FAILURE, format!("{:?}", e)))?;

    let request = authorized(Request::post(url))?
        .body(form)
        .map_err(|e| ApiError::transport(TRANSPORT_FAILURE, e))?;
    read(send(request, fallback).await?, fallback).await
}
