//! Blink Debit client SDK.
//!
//! Wraps every Blink Debit API operation and adds await helpers that poll a
//! consent, quick payment or payment until it resolves. Quick payments and
//! enduring consents still pending when the wait budget runs out are revoked
//! on a best-effort basis.
//!
//! # Quick Example
//!
//! ```no_run
//! use blinkdebit_client::{Amount, AuthFlow, Bank, BlinkDebitClient, Pcr, QuickPaymentRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), blinkdebit_client::BlinkPayError> {
//! let client = BlinkDebitClient::from_env()?;
//!
//! let created = client
//!     .create_quick_payment(&QuickPaymentRequest {
//!         flow: AuthFlow::redirect(Bank::Pnz, "https://shop.example/return"),
//!         pcr: Pcr {
//!             particulars: "order-42".to_string(),
//!             code: None,
//!             reference: None,
//!         },
//!         amount: Amount::nzd("25.00"),
//!     })
//!     .await?;
//!
//! let paid = client
//!     .await_successful_quick_payment(&created.quick_payment_id, 300)
//!     .await?;
//! println!("Consent status: {:?}", paid.consent.status);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod polling;

pub use client::{BlinkDebitClient, ResourceApis};
pub use polling::{
    poll_until_resolved, PollAccessor, PollContext, PollObserver, PollingCoordinator,
    TracingObserver,
};

// Re-export commonly needed types from core
pub use blinkdebit::{
    Amount, AuthFlow, AuthFlowDetail, Bank, BankMetadata, BlinkPayConfig, BlinkPayError, Consent,
    ConsentStatus, Currency, EnduringConsentRequest, Payment, PaymentRequest, PaymentStatus, Pcr,
    Period, QuickPaymentRequest, QuickPaymentResponse, Refund, RefundRequest, ResourceKind,
    SingleConsentRequest, StatusClass,
};
pub use tokio_util::sync::CancellationToken;
