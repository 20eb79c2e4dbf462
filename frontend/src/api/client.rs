use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{api::types::*, config, utils::storage};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const SESSION_EXPIRED_KEY: &str = "session_expired";

pub const SESSION_EXPIRED_MESSAGE: &str =
    "セッションの有効期限が切れました。再度ログインしてください。";
const GENERIC_ERROR_MESSAGE: &str = "エラーが発生しました。";

/// Error payload shape shared by all backend endpoints.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn bearer_token() -> Option<String> {
        storage::get_item(TOKEN_KEY).filter(|token| !token.trim().is_empty())
    }

    /// Attaches the persisted bearer token when one exists; requests made
    /// without a session go out unauthenticated and the backend answers 401.
    pub(crate) fn authorize(request: RequestBuilder) -> RequestBuilder {
        match Self::bearer_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Single chokepoint for every outbound call. Maps transport failures and
    /// runs the global 401 handling before the response reaches any caller.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Request failed: {}", e)))?;
        Self::handle_unauthorized_status(response.status());
        Ok(response)
    }

    fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            Self::clear_session();
            storage::set_item(SESSION_EXPIRED_KEY, "1");
            Self::redirect_to_login_if_needed();
        }
    }

    pub(crate) fn persist_session(response: &LoginResponse) -> Result<(), ApiError> {
        storage::set_item(TOKEN_KEY, &response.token);
        let user_json = serde_json::to_string(&response.user)
            .map_err(|e| ApiError::decode(format!("Failed to serialize user profile: {}", e)))?;
        storage::set_item(USER_KEY, &user_json);
        Ok(())
    }

    pub(crate) fn restore_session() -> Option<UserResponse> {
        Self::bearer_token()?;
        let raw_user = storage::get_item(USER_KEY)?;
        serde_json::from_str(&raw_user).ok()
    }

    pub(crate) fn clear_session() {
        storage::remove_item(TOKEN_KEY);
        storage::remove_item(USER_KEY);
    }

    /// Returns true exactly once after a 401 tore the session down; the login
    /// page consumes this to show the expiry notice a single time.
    pub fn take_session_expired_notice() -> bool {
        storage::take_item(SESSION_EXPIRED_KEY).is_some()
    }

    fn redirect_to_login_if_needed() {
        #[cfg(target_arch = "wasm32")]
        if let Some(window) = web_sys::window() {
            let location = window.location();
            let pathname = location.pathname().unwrap_or_default();
            if should_redirect_to_login(&pathname) {
                let _ = location.set_href("/login");
            }
        }
    }

    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(status, response).await)
        }
    }

    pub(crate) async fn map_bytes_response(response: Response) -> Result<Vec<u8>, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .bytes()
                .await
                .map(|bytes| bytes.to_vec())
                .map_err(|e| ApiError::network(format!("Failed to read response body: {}", e)))
        } else {
            Err(Self::error_from_response(status, response).await)
        }
    }

    async fn error_from_response(status: StatusCode, response: Response) -> ApiError {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.trim().is_empty());
        if status == StatusCode::UNAUTHORIZED {
            ApiError::Unauthorized(message.unwrap_or_else(|| SESSION_EXPIRED_MESSAGE.to_string()))
        } else {
            ApiError::Api {
                status: status.as_u16(),
                message: message.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            }
        }
    }
}

fn should_redirect_to_login(pathname: &str) -> bool {
    pathname != "/login"
}
