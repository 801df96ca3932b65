//! Per-resource accessors over [`ApiTransport`](crate::transport::ApiTransport).
//!
//! Each accessor rejects blank IDs with [`BlinkPayError::InvalidValue`] before
//! touching the network.

use crate::error::BlinkPayError;

pub mod consents;
pub mod metadata;
pub mod payments;
pub mod quick_payments;
pub mod refunds;

pub use consents::{EnduringConsentsApi, SingleConsentsApi};
pub use metadata::MetadataApi;
pub use payments::PaymentsApi;
pub use quick_payments::QuickPaymentsApi;
pub use refunds::RefundsApi;

pub(crate) fn require_id<'a>(what: &str, id: &'a str) -> Result<&'a str, BlinkPayError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(BlinkPayError::InvalidValue(format!("{what} must not be blank")));
    }
    Ok(trimmed)
}

/// `{collection}/{id}` with the ID percent-encoded as a single path segment.
pub(crate) fn resource_path(
    collection: &str,
    what: &str,
    id: &str,
) -> Result<String, BlinkPayError> {
    let id = require_id(what, id)?;
    Ok(format!("{collection}/{}", urlencoding::encode(id)))
}
