use std::sync::Arc;

use crate::api::resource_path;
use crate::constants::QUICK_PAYMENTS_PATH;
use crate::error::BlinkPayError;
use crate::model::{CreateQuickPaymentResponse, QuickPaymentRequest, QuickPaymentResponse};
use crate::transport::ApiTransport;

/// `/payments/v1/quick-payments`
#[derive(Clone)]
pub struct QuickPaymentsApi {
    transport: Arc<ApiTransport>,
}

impl QuickPaymentsApi {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    pub async fn create(
        &self,
        request: &QuickPaymentRequest,
    ) -> Result<CreateQuickPaymentResponse, BlinkPayError> {
        self.transport.post(QUICK_PAYMENTS_PATH, request).await
    }

    pub async fn get(&self, quick_payment_id: &str) -> Result<QuickPaymentResponse, BlinkPayError> {
        let path = resource_path(QUICK_PAYMENTS_PATH, "quick payment ID", quick_payment_id)?;
        self.transport.get(&path).await
    }

    pub async fn revoke(&self, quick_payment_id: &str) -> Result<(), BlinkPayError> {
        let path = resource_path(QUICK_PAYMENTS_PATH, "quick payment ID", quick_payment_id)?;
        self.transport.delete(&path).await
    }
}
