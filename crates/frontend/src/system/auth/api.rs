use contracts::shared::api_error::{ApiError, ErrorFallback};
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::{Request, Response};

use crate::shared::api::{client, Endpoint};

const LOGIN_FAILED: ErrorFallback =
    ErrorFallback::new("Login failed", "Check your username and password");
const REFRESH_FAILED: ErrorFallback =
    ErrorFallback::new("Session expired", "Please log in again");
const ME_FAILED: ErrorFallback =
    ErrorFallback::new("Could not load user", "Please log in again");

async fn parse<T: serde::de::DeserializeOwned>(
    response: Response,
    fallback: ErrorFallback,
) -> Result<T, ApiError> {
    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        return Err(ApiError::from_response_text(&text, fallback));
    }
    response.json::<T>().await.map_err(ApiError::decode)
}

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&client::url(Endpoint::Login))
        .json(&request)
        .map_err(ApiError::decode)?
        .send()
        .await
        .map_err(|e| ApiError::transport(LOGIN_FAILED.message, e))?;

    parse(response, LOGIN_FAILED).await
}

/// Exchange the refresh token for a new access token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&client::url(Endpoint::RefreshToken))
        .json(&request)
        .map_err(ApiError::decode)?
        .send()
        .await
        .map_err(|e| ApiError::transport(REFRESH_FAILED.message, e))?;

    parse(response, REFRESH_FAILED).await
}

/// Revoke the refresh token. Failures are only logged.
pub async fn logout(refresh_token: String) {
    let request = RefreshRequest { refresh_token };
    let result = match Request::post(&client::url(Endpoint::Logout)).json(&request) {
        Ok(req) => req.send().await.map(|_| ()),
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        log::warn!("Logout request failed: {}", e);
    }
}

/// Current user for an access token
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, ApiError> {
    let response = Request::get(&client::url(Endpoint::AuthMe))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| ApiError::transport(ME_FAILED.message, e))?;

    parse(response, ME_FAILED).await
}
