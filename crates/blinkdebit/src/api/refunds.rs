use std::sync::Arc;

use crate::api::{require_id, resource_path};
use crate::constants::REFUNDS_PATH;
use crate::error::BlinkPayError;
use crate::model::{Refund, RefundRequest, RefundResponse};
use crate::transport::ApiTransport;

/// `/payments/v1/refunds`
#[derive(Clone)]
pub struct RefundsApi {
    transport: Arc<ApiTransport>,
}

impl RefundsApi {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    pub async fn create(&self, request: &RefundRequest) -> Result<RefundResponse, BlinkPayError> {
        require_id("payment ID", request.payment_id())?;
        self.transport.post(REFUNDS_PATH, request).await
    }

    pub async fn get(&self, refund_id: &str) -> Result<Refund, BlinkPayError> {
        let path = resource_path(REFUNDS_PATH, "refund ID", refund_id)?;
        self.transport.get(&path).await
    }
}
