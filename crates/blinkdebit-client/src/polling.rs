//! Await helpers: poll a resource until it resolves or a time budget runs out.
//!
//! All four await operations share [`poll_until_resolved`]. They differ only in
//! the fetch call, the status partition and whether a revoke is attempted when
//! the budget runs out:
//!
//! | operation                           | success                     | terminal-negative | gateway timeout | revoke on timeout |
//! |-------------------------------------|-----------------------------|-------------------|-----------------|-------------------|
//! | `await_successful_quick_payment`    | Authorised, Consumed        | Rejected, Revoked | keeps polling   | yes               |
//! | `await_authorised_single_consent`   | Authorised, Consumed        | Rejected, Revoked | fails           | no                |
//! | `await_authorised_enduring_consent` | Authorised, Consumed        | Rejected, Revoked | fails           | yes               |
//! | `await_successful_payment`          | AcceptedSettlementCompleted | Rejected          | n/a             | no                |

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use blinkdebit::{
    BlinkPayError, Consent, Payment, QuickPaymentResponse, ResourceKind, StatusClass,
    POLL_INTERVAL,
};

/// The status lookups and revocations the await helpers depend on.
pub trait PollAccessor: Send + Sync {
    fn fetch_quick_payment(
        &self,
        quick_payment_id: &str,
    ) -> impl Future<Output = Result<QuickPaymentResponse, BlinkPayError>> + Send;

    fn fetch_single_consent(
        &self,
        consent_id: &str,
    ) -> impl Future<Output = Result<Consent, BlinkPayError>> + Send;

    fn fetch_enduring_consent(
        &self,
        consent_id: &str,
    ) -> impl Future<Output = Result<Consent, BlinkPayError>> + Send;

    fn fetch_payment(
        &self,
        payment_id: &str,
    ) -> impl Future<Output = Result<Payment, BlinkPayError>> + Send;

    fn revoke_quick_payment(
        &self,
        quick_payment_id: &str,
    ) -> impl Future<Output = Result<(), BlinkPayError>> + Send;

    fn revoke_enduring_consent(
        &self,
        consent_id: &str,
    ) -> impl Future<Output = Result<(), BlinkPayError>> + Send;
}

/// Hook for status observations and revoke outcomes.
///
/// Every method has an empty default, so implementors pick what they need.
pub trait PollObserver: Send + Sync {
    /// Called after every status fetch.
    fn on_status(
        &self,
        _kind: ResourceKind,
        _id: &str,
        _attempt: u32,
        _status: &str,
        _class: StatusClass,
    ) {
    }

    /// Called once the budget is spent, before the timeout error is returned.
    fn on_timeout(&self, _kind: ResourceKind, _id: &str, _max_wait_secs: u64) {}

    /// Called with the result of the best-effort revoke that follows a timeout.
    fn on_revoke(&self, _kind: ResourceKind, _id: &str, _outcome: Result<(), &BlinkPayError>) {}
}

/// Default observer: logs through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PollObserver for TracingObserver {
    fn on_status(
        &self,
        kind: ResourceKind,
        id: &str,
        attempt: u32,
        status: &str,
        class: StatusClass,
    ) {
        match class {
            StatusClass::Pending => {
                tracing::debug!(%kind, resource_id = id, attempt, status, "Still waiting")
            }
            StatusClass::Success => {
                tracing::info!(%kind, resource_id = id, attempt, status, "Resolved")
            }
            StatusClass::Rejected | StatusClass::GatewayTimeout => {
                tracing::warn!(%kind, resource_id = id, attempt, status, "Reached terminal failure")
            }
        }
    }

    fn on_timeout(&self, kind: ResourceKind, id: &str, max_wait_secs: u64) {
        tracing::warn!(%kind, resource_id = id, max_wait_secs, "Gave up waiting");
    }

    fn on_revoke(&self, kind: ResourceKind, id: &str, outcome: Result<(), &BlinkPayError>) {
        match outcome {
            Ok(()) => tracing::info!(%kind, resource_id = id, "Revoked after timeout"),
            Err(e) => {
                tracing::warn!(%kind, resource_id = id, error = %e, "Revoke after timeout failed")
            }
        }
    }
}

/// Shared settings for one poll operation.
#[derive(Clone, Copy)]
pub struct PollContext<'a> {
    pub observer: &'a dyn PollObserver,
    pub cancel: &'a CancellationToken,
    pub interval: Duration,
}

/// Poll `fetch` until `classify` reports a terminal class or `max_wait_secs` elapses.
///
/// The first fetch happens immediately, and at least one fetch always happens,
/// so a zero budget means "check exactly once". Between fetches the loop
/// sleeps for `ctx.interval`; cancelling `ctx.cancel` during that sleep ends
/// the operation with [`BlinkPayError::Interrupted`]. Fetch errors are returned
/// as-is. On timeout, `compensate` (if any) is called, its future awaited and
/// the outcome reported to the observer; it never replaces the
/// [`BlinkPayError::PollTimeout`]. It is not called on any other outcome.
pub async fn poll_until_resolved<T, F, Fut, K, R, C>(
    ctx: PollContext<'_>,
    kind: ResourceKind,
    id: &str,
    max_wait_secs: u64,
    mut fetch: F,
    classify: K,
    compensate: Option<R>,
) -> Result<T, BlinkPayError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, BlinkPayError>>,
    K: Fn(&T) -> (&'static str, StatusClass),
    R: FnOnce() -> C,
    C: Future<Output = Result<(), BlinkPayError>>,
{
    let deadline = Instant::now() + Duration::from_secs(max_wait_secs);
    let mut attempt: u32 = 0;

    loop {
        if ctx.cancel.is_cancelled() {
            return Err(interrupted(kind, id));
        }

        attempt += 1;
        let resource = fetch().await?;
        let (status, class) = classify(&resource);
        ctx.observer.on_status(kind, id, attempt, status, class);

        match class {
            StatusClass::Success => return Ok(resource),
            StatusClass::Rejected => {
                return Err(BlinkPayError::Rejected {
                    kind,
                    id: id.to_string(),
                    status: status.to_string(),
                })
            }
            StatusClass::GatewayTimeout => {
                return Err(BlinkPayError::GatewayTimeout {
                    kind,
                    id: id.to_string(),
                })
            }
            StatusClass::Pending => {}
        }

        if Instant::now() >= deadline {
            break;
        }

        tokio::select! {
            biased;
            _ = ctx.cancel.cancelled() => return Err(interrupted(kind, id)),
            _ = tokio::time::sleep(ctx.interval) => {}
        }

        if Instant::now() >= deadline {
            break;
        }
    }

    ctx.observer.on_timeout(kind, id, max_wait_secs);
    if let Some(revoke) = compensate {
        let outcome = revoke().await;
        ctx.observer.on_revoke(kind, id, outcome.as_ref().map(|_| ()));
    }

    Err(BlinkPayError::PollTimeout {
        kind,
        id: id.to_string(),
        max_wait_secs,
    })
}

fn interrupted(kind: ResourceKind, id: &str) -> BlinkPayError {
    BlinkPayError::Interrupted {
        kind,
        id: id.to_string(),
    }
}

type NoCompensation = fn() -> std::future::Ready<Result<(), BlinkPayError>>;

/// Runs the four await operations against a [`PollAccessor`].
///
/// Holds no per-call state: concurrent awaits on one coordinator are
/// independent of each other.
pub struct PollingCoordinator<A> {
    accessor: A,
    observer: Arc<dyn PollObserver>,
    cancel: CancellationToken,
}

impl<A: PollAccessor> PollingCoordinator<A> {
    pub fn new(accessor: A) -> Self {
        Self {
            accessor,
            observer: Arc::new(TracingObserver),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn PollObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Use `token` to interrupt in-flight awaits. Cancelling it interrupts
    /// every await currently sleeping on this coordinator.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    fn context(&self) -> PollContext<'_> {
        PollContext {
            observer: self.observer.as_ref(),
            cancel: &self.cancel,
            interval: POLL_INTERVAL,
        }
    }

    /// Wait for a quick payment's consent to be authorised or consumed,
    /// revoking the quick payment if it is still pending at the deadline.
    pub async fn await_successful_quick_payment(
        &self,
        quick_payment_id: &str,
        max_wait_secs: u64,
    ) -> Result<QuickPaymentResponse, BlinkPayError> {
        let accessor = &self.accessor;
        poll_until_resolved(
            self.context(),
            ResourceKind::QuickPayment,
            quick_payment_id,
            max_wait_secs,
            move || accessor.fetch_quick_payment(quick_payment_id),
            |qp: &QuickPaymentResponse| {
                let status = qp.consent.status;
                (status.as_str(), status.classify_for_quick_payment())
            },
            Some(move || accessor.revoke_quick_payment(quick_payment_id)),
        )
        .await
    }

    /// Wait for a single consent to be authorised or consumed.
    pub async fn await_authorised_single_consent(
        &self,
        consent_id: &str,
        max_wait_secs: u64,
    ) -> Result<Consent, BlinkPayError> {
        let accessor = &self.accessor;
        poll_until_resolved(
            self.context(),
            ResourceKind::SingleConsent,
            consent_id,
            max_wait_secs,
            move || accessor.fetch_single_consent(consent_id),
            classify_consent,
            None::<NoCompensation>,
        )
        .await
    }

    /// Wait for an enduring consent to be authorised, revoking it if it is
    /// still pending at the deadline.
    pub async fn await_authorised_enduring_consent(
        &self,
        consent_id: &str,
        max_wait_secs: u64,
    ) -> Result<Consent, BlinkPayError> {
        let accessor = &self.accessor;
        poll_until_resolved(
            self.context(),
            ResourceKind::EnduringConsent,
            consent_id,
            max_wait_secs,
            move || accessor.fetch_enduring_consent(consent_id),
            classify_consent,
            Some(move || accessor.revoke_enduring_consent(consent_id)),
        )
        .await
    }

    /// Wait for a payment to reach `AcceptedSettlementCompleted`.
    pub async fn await_successful_payment(
        &self,
        payment_id: &str,
        max_wait_secs: u64,
    ) -> Result<Payment, BlinkPayError> {
        let accessor = &self.accessor;
        poll_until_resolved(
            self.context(),
            ResourceKind::Payment,
            payment_id,
            max_wait_secs,
            move || accessor.fetch_payment(payment_id),
            |payment: &Payment| (payment.status.as_str(), payment.status.classify()),
            None::<NoCompensation>,
        )
        .await
    }
}

fn classify_consent(consent: &Consent) -> (&'static str, StatusClass) {
    (consent.status.as_str(), consent.status.classify())
}
