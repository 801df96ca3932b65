use std::time::Duration;

/// Blink Debit sandbox host.
pub const SANDBOX_DEBIT_URL: &str = "https://sandbox.debit.blinkpay.co.nz";

/// Blink Debit production host.
pub const PRODUCTION_DEBIT_URL: &str = "https://debit.blinkpay.co.nz";

/// OAuth2 client-credentials token endpoint, relative to the debit URL.
pub const TOKEN_PATH: &str = "/oauth2/token";

pub const SINGLE_CONSENTS_PATH: &str = "/payments/v1/single-consents";
pub const ENDURING_CONSENTS_PATH: &str = "/payments/v1/enduring-consents";
pub const QUICK_PAYMENTS_PATH: &str = "/payments/v1/quick-payments";
pub const PAYMENTS_PATH: &str = "/payments/v1/payments";
pub const REFUNDS_PATH: &str = "/payments/v1/refunds";
pub const METADATA_PATH: &str = "/payments/v1/meta";

/// Header carrying a per-request UUID, echoed back in BlinkPay logs.
pub const REQUEST_ID_HEADER: &str = "request-id";

/// Header carrying a per-POST UUID so BlinkPay can deduplicate retries.
pub const IDEMPOTENCY_KEY_HEADER: &str = "idempotency-key";

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Tokens are refreshed this long before BlinkPay says they expire.
pub const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Fixed delay between status checks in the await helpers.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);
