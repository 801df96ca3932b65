use serde::{Deserialize, Serialize};

use super::{Amount, Bank};

/// Capabilities of one supported bank, as reported by `/payments/v1/meta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankMetadata {
    pub name: Bank,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_limit: Option<Amount>,
    #[serde(default)]
    pub features: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_flow: Option<serde_json::Value>,
}
