use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Amount, Pcr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefundStatus {
    Processing,
    Completed,
    Failed,
}

/// Request body for a refund, tagged by how the refund is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RefundRequest {
    /// Look up the payer's account number only; no money moves.
    AccountNumber { payment_id: String },
    FullRefund {
        payment_id: String,
        pcr: Pcr,
        consent_redirect: String,
    },
    PartialRefund {
        payment_id: String,
        pcr: Pcr,
        amount: Amount,
        consent_redirect: String,
    },
}

impl RefundRequest {
    pub fn payment_id(&self) -> &str {
        match self {
            Self::AccountNumber { payment_id }
            | Self::FullRefund { payment_id, .. }
            | Self::PartialRefund { payment_id, .. } => payment_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundResponse {
    pub refund_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    pub refund_id: String,
    pub status: RefundStatus,
    pub creation_timestamp: DateTime<Utc>,
    pub status_updated_timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<RefundRequest>,
}
