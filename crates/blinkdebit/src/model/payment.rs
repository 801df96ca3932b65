use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Amount, Pcr, Refund, StatusClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    AcceptedSettlementInProcess,
    AcceptedSettlementCompleted,
    Rejected,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::AcceptedSettlementInProcess => "AcceptedSettlementInProcess",
            Self::AcceptedSettlementCompleted => "AcceptedSettlementCompleted",
            Self::Rejected => "Rejected",
        }
    }

    /// Only a completed settlement counts as success; in-process is still pending.
    pub fn classify(&self) -> StatusClass {
        match self {
            Self::AcceptedSettlementCompleted => StatusClass::Success,
            Self::Rejected => StatusClass::Rejected,
            Self::Pending | Self::AcceptedSettlementInProcess => StatusClass::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Single,
    Enduring,
}

/// Amount and statement details for a payment against an enduring consent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnduringPaymentRequest {
    pub pcr: Pcr,
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub consent_id: String,
    /// Required for enduring consents, omitted for single consents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enduring_payment: Option<EnduringPaymentRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_reference_id: Option<String>,
}

impl PaymentRequest {
    pub fn single(consent_id: impl Into<String>) -> Self {
        Self {
            consent_id: consent_id.into(),
            enduring_payment: None,
            account_reference_id: None,
        }
    }

    pub fn enduring(consent_id: impl Into<String>, pcr: Pcr, amount: Amount) -> Self {
        Self {
            consent_id: consent_id.into(),
            enduring_payment: Some(EnduringPaymentRequest { pcr, amount }),
            account_reference_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub payment_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
    pub status: PaymentStatus,
    pub creation_timestamp: DateTime<Utc>,
    pub status_updated_timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<PaymentRequest>,
    #[serde(default)]
    pub refunds: Vec<Refund>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settlement_in_process_is_pending() {
        assert_eq!(
            PaymentStatus::AcceptedSettlementInProcess.classify(),
            StatusClass::Pending
        );
        assert_eq!(PaymentStatus::Pending.classify(), StatusClass::Pending);
        assert_eq!(
            PaymentStatus::AcceptedSettlementCompleted.classify(),
            StatusClass::Success
        );
        assert_eq!(PaymentStatus::Rejected.classify(), StatusClass::Rejected);
    }

    #[test]
    fn test_single_payment_request_omits_enduring_fields() {
        let value = serde_json::to_value(PaymentRequest::single("c-1")).unwrap();
        assert_eq!(value, serde_json::json!({"consent_id": "c-1"}));
    }

    #[test]
    fn test_deserialize_payment() {
        let payment: Payment = serde_json::from_str(
            r#"{
                "payment_id": "p-1",
                "type": "single",
                "status": "AcceptedSettlementCompleted",
                "creation_timestamp": "2024-03-01T09:15:00Z",
                "status_updated_timestamp": "2024-03-01T09:15:05Z",
                "detail": {"consent_id": "c-1"},
                "refunds": []
            }"#,
        )
        .unwrap();
        assert_eq!(payment.status, PaymentStatus::AcceptedSettlementCompleted);
        assert_eq!(payment.payment_type, Some(PaymentType::Single));
        assert_eq!(payment.detail.unwrap().consent_id, "c-1");
    }
}
