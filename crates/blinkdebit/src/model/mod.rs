//! Request and response shapes for the Blink Debit API.
//!
//! Field names follow the API's snake_case JSON; status values are PascalCase
//! strings. Each resource's status enum exposes a `classify` method that
//! partitions its values into a [`StatusClass`] for the await helpers.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod common;
pub mod consent;
pub mod metadata;
pub mod payment;
pub mod quick_payment;
pub mod refund;

pub use common::*;
pub use consent::*;
pub use metadata::*;
pub use payment::*;
pub use quick_payment::*;
pub use refund::*;

/// The resource kinds that can be awaited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    QuickPayment,
    SingleConsent,
    EnduringConsent,
    Payment,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::QuickPayment => "quick payment",
            Self::SingleConsent => "single consent",
            Self::EnduringConsent => "enduring consent",
            Self::Payment => "payment",
        };
        f.write_str(s)
    }
}

/// Where a status sits in a resource's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// Terminal and positive: stop waiting and return the resource.
    Success,
    /// Terminal and negative: rejected or revoked.
    Rejected,
    /// The bank gateway gave up waiting for the customer.
    GatewayTimeout,
    /// Still in progress.
    Pending,
}
