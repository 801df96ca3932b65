//! OAuth2 client-credentials token acquisition and caching.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::BlinkPayConfig;
use crate::constants::{TOKEN_EXPIRY_MARGIN, TOKEN_PATH};
use crate::error::BlinkPayError;

#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'static str,
}

/// Response from the `/oauth2/token` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds.
    pub expires_in: u64,
    #[serde(default)]
    pub scope: Option<String>,
}

struct CachedToken {
    access_token: String,
    refresh_at: Instant,
}

/// Hands out bearer tokens, fetching a new one shortly before the cached one expires.
///
/// Refreshes are serialised behind a mutex, so concurrent callers share a
/// single token request.
pub struct AccessTokenManager {
    http: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    cached: Mutex<Option<CachedToken>>,
}

impl AccessTokenManager {
    pub fn new(http: reqwest::Client, config: &BlinkPayConfig) -> Self {
        Self {
            http,
            token_url: format!("{}{TOKEN_PATH}", config.debit_url),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            cached: Mutex::new(None),
        }
    }

    /// Return a valid access token, requesting a new one if needed.
    pub async fn access_token(&self) -> Result<String, BlinkPayError> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.refresh_at {
                return Ok(token.access_token.clone());
            }
            tracing::debug!("Access token near expiry, refreshing");
        }

        let response = self.request_token().await?;
        let lifetime = Duration::from_secs(response.expires_in);
        let refresh_at = Instant::now() + lifetime.saturating_sub(TOKEN_EXPIRY_MARGIN);
        tracing::info!(
            expires_in = response.expires_in,
            scope = response.scope.as_deref().unwrap_or(""),
            "Obtained BlinkPay access token"
        );

        *cached = Some(CachedToken {
            access_token: response.access_token.clone(),
            refresh_at,
        });
        Ok(response.access_token)
    }

    /// Drop the cached token so the next call fetches a fresh one.
    pub async fn invalidate(&self) {
        *self.cached.lock().await = None;
    }

    async fn request_token(&self) -> Result<TokenResponse, BlinkPayError> {
        let body = TokenRequest {
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            grant_type: "client_credentials",
        };

        let resp = self.http.post(&self.token_url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Token request failed");
            return Err(BlinkPayError::from_status(status.as_u16(), &text));
        }

        Ok(resp.json::<TokenResponse>().await?)
    }
}
