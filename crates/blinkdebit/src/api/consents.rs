use std::sync::Arc;

use crate::api::resource_path;
use crate::constants::{ENDURING_CONSENTS_PATH, SINGLE_CONSENTS_PATH};
use crate::error::BlinkPayError;
use crate::model::{Consent, CreateConsentResponse, EnduringConsentRequest, SingleConsentRequest};
use crate::transport::ApiTransport;

/// `/payments/v1/single-consents`
#[derive(Clone)]
pub struct SingleConsentsApi {
    transport: Arc<ApiTransport>,
}

impl SingleConsentsApi {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    pub async fn create(
        &self,
        request: &SingleConsentRequest,
    ) -> Result<CreateConsentResponse, BlinkPayError> {
        self.transport.post(SINGLE_CONSENTS_PATH, request).await
    }

    pub async fn get(&self, consent_id: &str) -> Result<Consent, BlinkPayError> {
        let path = resource_path(SINGLE_CONSENTS_PATH, "consent ID", consent_id)?;
        self.transport.get(&path).await
    }

    pub async fn revoke(&self, consent_id: &str) -> Result<(), BlinkPayError> {
        let path = resource_path(SINGLE_CONSENTS_PATH, "consent ID", consent_id)?;
        self.transport.delete(&path).await
    }
}

/// `/payments/v1/enduring-consents`
#[derive(Clone)]
pub struct EnduringConsentsApi {
    transport: Arc<ApiTransport>,
}

impl EnduringConsentsApi {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    pub async fn create(
        &self,
        request: &EnduringConsentRequest,
    ) -> Result<CreateConsentResponse, BlinkPayError> {
        if let Some(expiry) = request.expiry_timestamp {
            if expiry <= request.from_timestamp {
                return Err(BlinkPayError::InvalidValue(
                    "expiry timestamp must be after the start timestamp".to_string(),
                ));
            }
        }
        self.transport.post(ENDURING_CONSENTS_PATH, request).await
    }

    pub async fn get(&self, consent_id: &str) -> Result<Consent, BlinkPayError> {
        let path = resource_path(ENDURING_CONSENTS_PATH, "consent ID", consent_id)?;
        self.transport.get(&path).await
    }

    pub async fn revoke(&self, consent_id: &str) -> Result<(), BlinkPayError> {
        let path = resource_path(ENDURING_CONSENTS_PATH, "consent ID", consent_id)?;
        self.transport.delete(&path).await
    }
}
