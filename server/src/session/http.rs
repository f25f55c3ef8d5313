use super::provider::{SessionError, SessionProvider};
use super::types::{ApiResponse, Session};
use crate::common::HttpError;
use async_trait::async_trait;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

const SESSION_PATH: &str = "/user/session";
const LOGOUT_PATH: &str = "/user/logout";
const TOKEN_HEADER: &str = "X-Token";

#[derive(Debug, Clone)]
pub struct HttpSessionConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub token: Option<String>,
}

impl Default for HttpSessionConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:10086/api".to_string(),
            timeout: Duration::from_secs(10),
            token: None,
        }
    }
}

/// [`SessionProvider`] talking to the im.dev backend over HTTP.
///
/// The session token travels in the `X-Token` header. Any non-success status
/// is reported as [`HttpError::Status`].
pub struct HttpSessionProvider {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    token: RwLock<Option<String>>,
}

impl HttpSessionProvider {
    pub fn new(config: HttpSessionConfig) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| HttpError::ClientCreation {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            token: RwLock::new(config.token),
        })
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_token(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token() {
            Some(token) => request.header(TOKEN_HEADER, token),
            None => request,
        }
    }

    fn map_send_error(&self, url: &str, error: reqwest::Error) -> HttpError {
        if error.is_timeout() {
            HttpError::Timeout {
                url: url.to_string(),
                seconds: self.timeout.as_secs(),
            }
        } else {
            HttpError::RequestFailed {
                url: url.to_string(),
                reason: error.to_string(),
            }
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> Result<String, HttpError> {
        let response = self
            .with_token(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| self.map_send_error(url, e))
    }
}

/// Decodes the `{ "data": ... }` envelope of a session response body.
pub fn decode_session(body: &str) -> Result<Option<Session>, HttpError> {
    let envelope: ApiResponse<Session> =
        serde_json::from_str(body).map_err(|e| HttpError::InvalidResponse {
            expected: "session response envelope".to_string(),
            actual: e.to_string(),
        })?;
    Ok(envelope.data)
}

#[async_trait]
impl SessionProvider for HttpSessionProvider {
    async fn fetch_session(&self) -> Result<Option<Session>, SessionError> {
        let url = self.url(SESSION_PATH);
        log::debug!("GET {url}");
        let body = self.send(self.client.get(&url), &url).await?;
        Ok(decode_session(&body)?)
    }

    async fn logout(&self) -> Result<(), SessionError> {
        let url = self.url(LOGOUT_PATH);
        log::debug!("POST {url}");
        self.send(self.client.post(&url), &url).await?;
        Ok(())
    }
}
