//! Typed access to the BlinkPay Blink Debit API.
//!
//! This crate holds the building blocks: configuration, the error taxonomy,
//! request/response models, OAuth2 token caching, and one accessor per API
//! resource. Most applications use the `blinkdebit-client` facade instead,
//! which adds the await helpers on top.
//!
//! # Quick example
//!
//! ```no_run
//! use std::sync::Arc;
//! use blinkdebit::{api::PaymentsApi, ApiTransport, BlinkPayConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), blinkdebit::BlinkPayError> {
//! let config = BlinkPayConfig::from_env()?;
//! let transport = Arc::new(ApiTransport::new(&config)?);
//! let payment = PaymentsApi::new(transport).get("payment-id").await?;
//! println!("{:?}", payment.status);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod token;
pub mod transport;

pub use config::BlinkPayConfig;
pub use constants::*;
pub use error::{BlinkPayError, Result};
pub use model::*;
pub use token::AccessTokenManager;
pub use transport::ApiTransport;
