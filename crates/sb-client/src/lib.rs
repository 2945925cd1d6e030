//! HTTP client for the SkillBridge backend
//!
//! Thin typed wrapper over the five backend endpoints the web client
//! consumes. All methods are async and browser-friendly; errors are
//! uniformly recoverable and callers decide whether to retry (forms) or
//! keep stale data (polls).

use gloo_net::http::Request;
use sb_core::{
    BetaUser, CountResponse, InterestSubmission, JoinBetaRequest, SubmitInterestRequest,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("server returned status {0}")]
    Status(u16),

    /// The response body did not decode; callers treat this like a
    /// network failure, nothing is partially rendered
    #[error("unexpected response payload: {0}")]
    Decode(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Typed client bound to one backend base URL
///
/// The base defaults to same-origin relative paths; a deployment that
/// serves the API elsewhere sets `API_BASE_URL` at build time.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        ApiClient::new(option_env!("API_BASE_URL").unwrap_or(""))
    }
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> ApiClient {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        ApiClient { base }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let resp = Request::get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ClientError::Status(resp.status()));
        }
        resp.json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// `POST /api/beta/join`: submit the first-stage signup
    ///
    /// The returned record carries the server-assigned id and the stored
    /// email the survey stage must use.
    pub async fn join_beta(&self, payload: &JoinBetaRequest) -> ClientResult<BetaUser> {
        let url = self.url("/api/beta/join");
        tracing::debug!(%url, "POST");
        let resp = Request::post(&url)
            .json(payload)
            .map_err(|e| ClientError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ClientError::Status(resp.status()));
        }
        resp.json::<BetaUser>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// `POST /api/service-interest/submit`: submit the survey
    pub async fn submit_interests(&self, payload: &SubmitInterestRequest) -> ClientResult<()> {
        let url = self.url("/api/service-interest/submit");
        tracing::debug!(%url, "POST");
        let resp = Request::post(&url)
            .json(payload)
            .map_err(|e| ClientError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ClientError::Status(resp.status()));
        }
        Ok(())
    }

    /// `GET /api/beta/all`: every stored beta signup
    pub async fn list_beta_users(&self) -> ClientResult<Vec<BetaUser>> {
        self.get_json("/api/beta/all").await
    }

    /// `GET /api/beta/count`: total number of beta signups
    pub async fn beta_count(&self) -> ClientResult<u64> {
        let resp: CountResponse = self.get_json("/api/beta/count").await?;
        Ok(resp.count)
    }

    /// `GET /api/service-interest/all`: every stored survey submission
    pub async fn list_interest_submissions(&self) -> ClientResult<Vec<InterestSubmission>> {
        self.get_json("/api/service-interest/all").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_is_same_origin() {
        let client = ApiClient::new("");
        assert_eq!(client.url("/api/beta/join"), "/api/beta/join");
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let client = ApiClient::new("https://api.skillbridge.example/");
        assert_eq!(
            client.url("/api/beta/count"),
            "https://api.skillbridge.example/api/beta/count"
        );
    }
}
