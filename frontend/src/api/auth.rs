use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse},
};

impl ApiClient {
    /// Authenticates against the backend and persists the session on success.
    /// Login is the one unauthenticated call: a 401 here means bad
    /// credentials, not an expired session, so it bypasses the global 401
    /// handling and is surfaced to the form instead.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/login", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Request failed: {}", e)))?;

        let login_response: LoginResponse = Self::map_json_response(response).await?;
        Self::persist_session(&login_response)?;
        Ok(login_response)
    }

    /// The consumed REST contract has no logout endpoint; ending the session
    /// is purely a client-side teardown of the persisted token and profile.
    pub fn logout(&self) {
        Self::clear_session();
    }
}
