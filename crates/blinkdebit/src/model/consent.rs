use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Amount, AuthFlow, Payment, Pcr, Period, Refund, StatusClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsentStatus {
    GatewayAwaitingSubmission,
    GatewayTimeout,
    AwaitingAuthorisation,
    Authorised,
    Consumed,
    Rejected,
    Revoked,
}

impl ConsentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GatewayAwaitingSubmission => "GatewayAwaitingSubmission",
            Self::GatewayTimeout => "GatewayTimeout",
            Self::AwaitingAuthorisation => "AwaitingAuthorisation",
            Self::Authorised => "Authorised",
            Self::Consumed => "Consumed",
            Self::Rejected => "Rejected",
            Self::Revoked => "Revoked",
        }
    }

    /// Partition used when awaiting a single or enduring consent.
    pub fn classify(&self) -> StatusClass {
        match self {
            Self::Authorised | Self::Consumed => StatusClass::Success,
            Self::Rejected | Self::Revoked => StatusClass::Rejected,
            Self::GatewayTimeout => StatusClass::GatewayTimeout,
            Self::GatewayAwaitingSubmission | Self::AwaitingAuthorisation => StatusClass::Pending,
        }
    }

    /// Partition used when awaiting a quick payment's nested consent.
    ///
    /// `GatewayTimeout` is not terminal here: the quick payment keeps being
    /// polled until the deadline, then revoked.
    pub fn classify_for_quick_payment(&self) -> StatusClass {
        match self.classify() {
            StatusClass::GatewayTimeout => StatusClass::Pending,
            class => class,
        }
    }
}

/// Request body for a one-off payment consent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleConsentRequest {
    pub flow: AuthFlow,
    pub pcr: Pcr,
    pub amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashed_customer_identifier: Option<String>,
}

/// Request body for a recurring payment consent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnduringConsentRequest {
    pub flow: AuthFlow,
    pub from_timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_timestamp: Option<DateTime<Utc>>,
    pub period: Period,
    /// Upper bound on the total paid within one `period`.
    pub maximum_amount_period: Amount,
    /// Upper bound on any single payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_amount_payment: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashed_customer_identifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateConsentResponse {
    pub consent_id: String,
    /// Where to send the customer, for redirect and gateway flows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consent {
    pub consent_id: String,
    pub status: ConsentStatus,
    pub creation_timestamp: DateTime<Utc>,
    pub status_updated_timestamp: DateTime<Utc>,
    /// The consent request as BlinkPay recorded it.
    #[serde(default)]
    pub detail: serde_json::Value,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub refunds: Vec<Refund>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_network: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_consent_statuses() {
        assert_eq!(ConsentStatus::Authorised.classify(), StatusClass::Success);
        assert_eq!(ConsentStatus::Consumed.classify(), StatusClass::Success);
        assert_eq!(ConsentStatus::Rejected.classify(), StatusClass::Rejected);
        assert_eq!(ConsentStatus::Revoked.classify(), StatusClass::Rejected);
        assert_eq!(
            ConsentStatus::GatewayTimeout.classify(),
            StatusClass::GatewayTimeout
        );
        assert_eq!(
            ConsentStatus::AwaitingAuthorisation.classify(),
            StatusClass::Pending
        );
        assert_eq!(
            ConsentStatus::GatewayAwaitingSubmission.classify(),
            StatusClass::Pending
        );
    }

    #[test]
    fn test_quick_payment_treats_gateway_timeout_as_pending() {
        assert_eq!(
            ConsentStatus::GatewayTimeout.classify_for_quick_payment(),
            StatusClass::Pending
        );
        assert_eq!(
            ConsentStatus::Revoked.classify_for_quick_payment(),
            StatusClass::Rejected
        );
        assert_eq!(
            ConsentStatus::Consumed.classify_for_quick_payment(),
            StatusClass::Success
        );
    }

    #[test]
    fn test_as_str_matches_wire_value() {
        for status in [
            ConsentStatus::GatewayAwaitingSubmission,
            ConsentStatus::GatewayTimeout,
            ConsentStatus::AwaitingAuthorisation,
            ConsentStatus::Authorised,
            ConsentStatus::Consumed,
            ConsentStatus::Rejected,
            ConsentStatus::Revoked,
        ] {
            let wire = serde_json::to_value(status).unwrap();
            assert_eq!(wire, status.as_str());
        }
    }

    #[test]
    fn test_deserialize_consent() {
        let consent: Consent = serde_json::from_str(
            r#"{
                "consent_id": "c6a2dc2e-4d4b-4a6b-9f0e-7f3b2c1d0e9a",
                "status": "AwaitingAuthorisation",
                "creation_timestamp": "2024-03-01T09:15:00.000+13:00",
                "status_updated_timestamp": "2024-03-01T09:15:02.000+13:00",
                "detail": {"type": "single"},
                "payments": [],
                "refunds": []
            }"#,
        )
        .unwrap();
        assert_eq!(consent.status, ConsentStatus::AwaitingAuthorisation);
        assert!(consent.payments.is_empty());
        assert_eq!(consent.detail["type"], "single");
    }
}
