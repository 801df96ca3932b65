use std::sync::Arc;

use crate::constants::METADATA_PATH;
use crate::error::BlinkPayError;
use crate::model::BankMetadata;
use crate::transport::ApiTransport;

/// `/payments/v1/meta`
#[derive(Clone)]
pub struct MetadataApi {
    transport: Arc<ApiTransport>,
}

impl MetadataApi {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// List the banks BlinkPay supports and what each one can do.
    pub async fn get(&self) -> Result<Vec<BankMetadata>, BlinkPayError> {
        self.transport.get(METADATA_PATH).await
    }
}
