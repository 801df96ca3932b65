use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "NZD")]
    Nzd,
}

/// A monetary amount. `total` is a decimal string such as `"25.50"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub currency: Currency,
    pub total: String,
}

impl Amount {
    pub fn nzd(total: impl Into<String>) -> Self {
        Self {
            currency: Currency::Nzd,
            total: total.into(),
        }
    }
}

/// Particulars, code and reference shown on the payer's bank statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pcr {
    pub particulars: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bank {
    #[serde(rename = "ASB")]
    Asb,
    #[serde(rename = "ANZ")]
    Anz,
    #[serde(rename = "BNZ")]
    Bnz,
    Westpac,
    KiwiBank,
    #[serde(rename = "PNZ")]
    Pnz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierType {
    PhoneNumber,
    ConsentId,
}

/// How the customer should be taken through bank authorisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthFlow {
    pub detail: AuthFlowDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthFlowDetail {
    /// Redirect the customer to their bank, then back to `redirect_uri`.
    Redirect { bank: Bank, redirect_uri: String },
    /// Push an authorisation request to the customer's banking app.
    Decoupled {
        bank: Bank,
        identifier_type: IdentifierType,
        identifier_value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        callback_url: Option<String>,
    },
    /// Let the customer pick their bank on the BlinkPay hosted gateway.
    Gateway {
        redirect_uri: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flow_hint: Option<FlowHint>,
    },
}

/// Preselects a bank and flow on the hosted gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowHint {
    #[serde(rename = "type")]
    pub flow_type: FlowHintType,
    pub bank: Bank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowHintType {
    Redirect,
    Decoupled,
}

impl AuthFlow {
    pub fn redirect(bank: Bank, redirect_uri: impl Into<String>) -> Self {
        Self {
            detail: AuthFlowDetail::Redirect {
                bank,
                redirect_uri: redirect_uri.into(),
            },
        }
    }

    pub fn gateway(redirect_uri: impl Into<String>) -> Self {
        Self {
            detail: AuthFlowDetail::Gateway {
                redirect_uri: redirect_uri.into(),
                flow_hint: None,
            },
        }
    }
}

/// Recurrence period for enduring consent limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Daily,
    Weekly,
    Fortnightly,
    Monthly,
    Yearly,
}
