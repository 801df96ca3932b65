use serde::{Deserialize, Serialize};

use super::{Amount, AuthFlow, Consent, Pcr};

/// Request body for a combined consent-and-payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickPaymentRequest {
    pub flow: AuthFlow,
    pub pcr: Pcr,
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateQuickPaymentResponse {
    pub quick_payment_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
}

/// A quick payment. Its lifecycle status lives on the nested consent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickPaymentResponse {
    pub quick_payment_id: String,
    pub consent: Consent,
}
