//! Authenticated JSON transport shared by all API accessors.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::BlinkPayConfig;
use crate::constants::{IDEMPOTENCY_KEY_HEADER, REQUEST_ID_HEADER};
use crate::error::BlinkPayError;
use crate::token::AccessTokenManager;

/// Sends bearer-authenticated requests to the debit API and decodes JSON replies.
pub struct ApiTransport {
    http: reqwest::Client,
    base_url: String,
    tokens: AccessTokenManager,
}

impl ApiTransport {
    /// Build a transport with its own HTTP client and token manager.
    pub fn new(config: &BlinkPayConfig) -> Result<Self, BlinkPayError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self::with_http_client(config, http))
    }

    /// Build a transport around an existing `reqwest::Client`.
    pub fn with_http_client(config: &BlinkPayConfig, http: reqwest::Client) -> Self {
        let tokens = AccessTokenManager::new(http.clone(), config);
        Self {
            http,
            base_url: config.debit_url.clone(),
            tokens,
        }
    }

    pub fn tokens(&self) -> &AccessTokenManager {
        &self.tokens
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, BlinkPayError> {
        let resp = self.send(reqwest::Method::GET, path, None::<&()>).await?;
        decode(resp).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, BlinkPayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.send(reqwest::Method::POST, path, Some(body)).await?;
        decode(resp).await
    }

    /// DELETE a resource. Any 2xx reply counts as success; the body is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), BlinkPayError> {
        let resp = self.send(reqwest::Method::DELETE, path, None::<&()>).await?;
        check_status(resp).await.map(|_| ())
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, BlinkPayError> {
        let token = self.tokens.access_token().await?;
        let request_id = uuid::Uuid::new_v4().to_string();
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%method, path, %request_id, "BlinkPay request");

        let mut req = self
            .http
            .request(method, &url)
            .bearer_auth(token)
            .header(REQUEST_ID_HEADER, &request_id);
        if let Some(b) = body {
            req = req
                .header(IDEMPOTENCY_KEY_HEADER, uuid::Uuid::new_v4().to_string())
                .json(b);
        }

        Ok(req.send().await?)
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, BlinkPayError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), "BlinkPay request failed");
    Err(BlinkPayError::from_status(status.as_u16(), &body))
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, BlinkPayError> {
    let resp = check_status(resp).await?;
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
