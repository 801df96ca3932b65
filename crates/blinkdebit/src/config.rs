//! Client configuration: BlinkPay host, OAuth2 credentials and request timeout.

use std::fmt;
use std::time::Duration;

use crate::constants::{DEFAULT_TIMEOUT, SANDBOX_DEBIT_URL};
use crate::error::BlinkPayError;

/// Connection settings for the Blink Debit API.
#[derive(Clone, PartialEq, Eq)]
pub struct BlinkPayConfig {
    /// Base URL of the debit API, without a trailing slash.
    pub debit_url: String,
    pub client_id: String,
    pub client_secret: String,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
}

impl BlinkPayConfig {
    /// Create a configuration with the default request timeout.
    pub fn new(
        debit_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        let debit_url: String = debit_url.into();
        Self {
            debit_url: debit_url.trim_end_matches('/').to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// - `BLINKPAY_DEBIT_URL` (default: sandbox)
    /// - `BLINKPAY_CLIENT_ID` (required)
    /// - `BLINKPAY_CLIENT_SECRET` (required)
    /// - `BLINKPAY_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self, BlinkPayError> {
        let debit_url = std::env::var("BLINKPAY_DEBIT_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| SANDBOX_DEBIT_URL.to_string());

        let client_id = required_env("BLINKPAY_CLIENT_ID")?;
        let client_secret = required_env("BLINKPAY_CLIENT_SECRET")?;

        let timeout = match std::env::var("BLINKPAY_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| {
                    BlinkPayError::Config(format!("invalid BLINKPAY_TIMEOUT_SECS {raw:?}: {e}"))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TIMEOUT,
        };

        let config = Self::new(debit_url, client_id, client_secret).with_timeout(timeout);
        config.validate()?;
        Ok(config)
    }

    /// Check that the URL is a usable http(s) URL and the credentials are present.
    pub fn validate(&self) -> Result<(), BlinkPayError> {
        let parsed = url::Url::parse(&self.debit_url).map_err(|e| {
            BlinkPayError::Config(format!("invalid debit URL {:?}: {e}", self.debit_url))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BlinkPayError::Config(format!(
                "debit URL must use http or https, got {:?}",
                parsed.scheme()
            )));
        }
        if self.client_id.trim().is_empty() {
            return Err(BlinkPayError::Config("client ID must not be blank".to_string()));
        }
        if self.client_secret.trim().is_empty() {
            return Err(BlinkPayError::Config(
                "client secret must not be blank".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(BlinkPayError::Config("timeout must be non-zero".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for BlinkPayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlinkPayConfig")
            .field("debit_url", &self.debit_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn required_env(name: &str) -> Result<String, BlinkPayError> {
    std::env::var(name)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| BlinkPayError::Config(format!("{name} is required")))
}
