use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use blinkdebit::api::{
    EnduringConsentsApi, MetadataApi, PaymentsApi, QuickPaymentsApi, RefundsApi,
    SingleConsentsApi,
};
use blinkdebit::{
    ApiTransport, BankMetadata, BlinkPayConfig, BlinkPayError, Consent, CreateConsentResponse,
    CreateQuickPaymentResponse, EnduringConsentRequest, Payment, PaymentRequest, PaymentResponse,
    QuickPaymentRequest, QuickPaymentResponse, Refund, RefundRequest, RefundResponse,
    SingleConsentRequest,
};

use crate::polling::{PollAccessor, PollObserver, PollingCoordinator};

/// One accessor per Blink Debit resource, sharing a single transport.
#[derive(Clone)]
pub struct ResourceApis {
    pub single_consents: SingleConsentsApi,
    pub enduring_consents: EnduringConsentsApi,
    pub quick_payments: QuickPaymentsApi,
    pub payments: PaymentsApi,
    pub refunds: RefundsApi,
    pub metadata: MetadataApi,
}

impl ResourceApis {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self {
            single_consents: SingleConsentsApi::new(transport.clone()),
            enduring_consents: EnduringConsentsApi::new(transport.clone()),
            quick_payments: QuickPaymentsApi::new(transport.clone()),
            payments: PaymentsApi::new(transport.clone()),
            refunds: RefundsApi::new(transport.clone()),
            metadata: MetadataApi::new(transport),
        }
    }
}

impl PollAccessor for ResourceApis {
    async fn fetch_quick_payment(
        &self,
        quick_payment_id: &str,
    ) -> Result<QuickPaymentResponse, BlinkPayError> {
        self.quick_payments.get(quick_payment_id).await
    }

    async fn fetch_single_consent(&self, consent_id: &str) -> Result<Consent, BlinkPayError> {
        self.single_consents.get(consent_id).await
    }

    async fn fetch_enduring_consent(&self, consent_id: &str) -> Result<Consent, BlinkPayError> {
        self.enduring_consents.get(consent_id).await
    }

    async fn fetch_payment(&self, payment_id: &str) -> Result<Payment, BlinkPayError> {
        self.payments.get(payment_id).await
    }

    async fn revoke_quick_payment(&self, quick_payment_id: &str) -> Result<(), BlinkPayError> {
        self.quick_payments.revoke(quick_payment_id).await
    }

    async fn revoke_enduring_consent(&self, consent_id: &str) -> Result<(), BlinkPayError> {
        self.enduring_consents.revoke(consent_id).await
    }
}

/// High-level Blink Debit client: every API operation plus the await helpers.
pub struct BlinkDebitClient {
    coordinator: PollingCoordinator<ResourceApis>,
}

impl BlinkDebitClient {
    /// Create a client with its own HTTP client and token cache.
    pub fn new(config: &BlinkPayConfig) -> Result<Self, BlinkPayError> {
        let transport = Arc::new(ApiTransport::new(config)?);
        Ok(Self::with_transport(transport))
    }

    /// Create a client from `BLINKPAY_*` environment variables.
    pub fn from_env() -> Result<Self, BlinkPayError> {
        Self::new(&BlinkPayConfig::from_env()?)
    }

    /// Create a client around an existing transport.
    pub fn with_transport(transport: Arc<ApiTransport>) -> Self {
        Self {
            coordinator: PollingCoordinator::new(ResourceApis::new(transport)),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn PollObserver>) -> Self {
        self.coordinator = self.coordinator.with_observer(observer);
        self
    }

    /// Interrupt in-flight awaits when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.coordinator = self.coordinator.with_cancellation(token);
        self
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        self.coordinator.cancellation_token()
    }

    pub fn apis(&self) -> &ResourceApis {
        self.coordinator.accessor()
    }

    // Single consents

    pub async fn create_single_consent(
        &self,
        request: &SingleConsentRequest,
    ) -> Result<CreateConsentResponse, BlinkPayError> {
        self.apis().single_consents.create(request).await
    }

    pub async fn get_single_consent(&self, consent_id: &str) -> Result<Consent, BlinkPayError> {
        self.apis().single_consents.get(consent_id).await
    }

    pub async fn revoke_single_consent(&self, consent_id: &str) -> Result<(), BlinkPayError> {
        self.apis().single_consents.revoke(consent_id).await
    }

    // Enduring consents

    pub async fn create_enduring_consent(
        &self,
        request: &EnduringConsentRequest,
    ) -> Result<CreateConsentResponse, BlinkPayError> {
        self.apis().enduring_consents.create(request).await
    }

    pub async fn get_enduring_consent(&self, consent_id: &str) -> Result<Consent, BlinkPayError> {
        self.apis().enduring_consents.get(consent_id).await
    }

    pub async fn revoke_enduring_consent(&self, consent_id: &str) -> Result<(), BlinkPayError> {
        self.apis().enduring_consents.revoke(consent_id).await
    }

    // Quick payments

    pub async fn create_quick_payment(
        &self,
        request: &QuickPaymentRequest,
    ) -> Result<CreateQuickPaymentResponse, BlinkPayError> {
        self.apis().quick_payments.create(request).await
    }

    pub async fn get_quick_payment(
        &self,
        quick_payment_id: &str,
    ) -> Result<QuickPaymentResponse, BlinkPayError> {
        self.apis().quick_payments.get(quick_payment_id).await
    }

    pub async fn revoke_quick_payment(&self, quick_payment_id: &str) -> Result<(), BlinkPayError> {
        self.apis().quick_payments.revoke(quick_payment_id).await
    }

    // Payments and refunds

    pub async fn create_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentResponse, BlinkPayError> {
        self.apis().payments.create(request).await
    }

    pub async fn get_payment(&self, payment_id: &str) -> Result<Payment, BlinkPayError> {
        self.apis().payments.get(payment_id).await
    }

    pub async fn create_refund(
        &self,
        request: &RefundRequest,
    ) -> Result<RefundResponse, BlinkPayError> {
        self.apis().refunds.create(request).await
    }

    pub async fn get_refund(&self, refund_id: &str) -> Result<Refund, BlinkPayError> {
        self.apis().refunds.get(refund_id).await
    }

    pub async fn get_meta(&self) -> Result<Vec<BankMetadata>, BlinkPayError> {
        self.apis().metadata.get().await
    }

    // Await helpers

    /// See [`PollingCoordinator::await_successful_quick_payment`].
    pub async fn await_successful_quick_payment(
        &self,
        quick_payment_id: &str,
        max_wait_secs: u64,
    ) -> Result<QuickPaymentResponse, BlinkPayError> {
        self.coordinator
            .await_successful_quick_payment(quick_payment_id, max_wait_secs)
            .await
    }

    /// See [`PollingCoordinator::await_authorised_single_consent`].
    pub async fn await_authorised_single_consent(
        &self,
        consent_id: &str,
        max_wait_secs: u64,
    ) -> Result<Consent, BlinkPayError> {
        self.coordinator
            .await_authorised_single_consent(consent_id, max_wait_secs)
            .await
    }

    /// See [`PollingCoordinator::await_authorised_enduring_consent`].
    pub async fn await_authorised_enduring_consent(
        &self,
        consent_id: &str,
        max_wait_secs: u64,
    ) -> Result<Consent, BlinkPayError> {
        self.coordinator
            .await_authorised_enduring_consent(consent_id, max_wait_secs)
            .await
    }

    /// See [`PollingCoordinator::await_successful_payment`].
    pub async fn await_successful_payment(
        &self,
        payment_id: &str,
        max_wait_secs: u64,
    ) -> Result<Payment, BlinkPayError> {
        self.coordinator
            .await_successful_payment(payment_id, max_wait_secs)
            .await
    }
}
