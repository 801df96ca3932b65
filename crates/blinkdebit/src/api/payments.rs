use std::sync::Arc;

use crate::api::{require_id, resource_path};
use crate::constants::PAYMENTS_PATH;
use crate::error::BlinkPayError;
use crate::model::{Payment, PaymentRequest, PaymentResponse};
use crate::transport::ApiTransport;

/// `/payments/v1/payments`
#[derive(Clone)]
pub struct PaymentsApi {
    transport: Arc<ApiTransport>,
}

impl PaymentsApi {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    pub async fn create(&self, request: &PaymentRequest) -> Result<PaymentResponse, BlinkPayError> {
        require_id("consent ID", &request.consent_id)?;
        self.transport.post(PAYMENTS_PATH, request).await
    }

    pub async fn get(&self, payment_id: &str) -> Result<Payment, BlinkPayError> {
        let path = resource_path(PAYMENTS_PATH, "payment ID", payment_id)?;
        self.transport.get(&path).await
    }
}
