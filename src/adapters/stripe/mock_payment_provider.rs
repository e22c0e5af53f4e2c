//! Mock payment provider for testing.
//!
//! Provides a configurable mock implementation of `PaymentProvider` for unit
//! and integration tests. Supports:
//! - Pre-configured checkout sessions and session statuses
//! - One-shot error injection
//! - Call tracking

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::ports::{
    CheckoutSession, CheckoutSessionStatus, CheckoutState, CreateCheckoutRequest, PaymentError,
    PaymentProvider, PaymentStatus,
};

/// Mock payment provider for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentProvider::new();
/// mock.add_completed_session("cs_paid");
/// mock.set_error(PaymentError::network("down"));
/// ```
#[derive(Default)]
pub struct MockPaymentProvider {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

/// Internal mutable state.
#[derive(Default)]
struct MockState {
    /// Known checkout sessions by ID.
    sessions: HashMap<String, CheckoutSessionStatus>,

    /// Error to return on next call.
    next_error: Option<PaymentError>,

    /// Track method calls for assertions.
    call_log: Vec<MethodCall>,

    /// Counter for generated session IDs.
    created: usize,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

impl MockPaymentProvider {
    /// Create a new mock provider with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Register a session with an explicit status.
    pub fn add_session(&self, status: CheckoutSessionStatus) {
        self.state().sessions.insert(status.id.clone(), status);
    }

    /// Register a paid and complete session.
    pub fn add_completed_session(&self, session_id: &str) {
        self.add_session(CheckoutSessionStatus {
            id: session_id.to_string(),
            payment_status: PaymentStatus::Paid,
            status: CheckoutState::Complete,
        });
    }

    /// Register a session the customer has not paid for yet.
    pub fn add_open_session(&self, session_id: &str) {
        self.add_session(CheckoutSessionStatus {
            id: session_id.to_string(),
            payment_status: PaymentStatus::Unpaid,
            status: CheckoutState::Open,
        });
    }

    /// Set an error to return on the next call to any method.
    pub fn set_error(&self, error: PaymentError) {
        self.state().next_error = Some(error);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// Get all recorded method calls.
    pub fn calls(&self) -> Vec<MethodCall> {
        self.state().call_log.clone()
    }

    /// Check if a method was called.
    pub fn was_called(&self, method: &str) -> bool {
        self.state().call_log.iter().any(|c| c.method == method)
    }

    /// Get count of calls to a method.
    pub fn call_count(&self, method: &str) -> usize {
        self.state()
            .call_log
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Internal Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn record_call(&self, method: &str, args: Vec<String>) {
        self.state().call_log.push(MethodCall {
            method: method.to_string(),
            args,
        });
    }

    fn check_error(&self) -> Result<(), PaymentError> {
        match self.state().next_error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Clone for MockPaymentProvider {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_checkout_session(
        &self,
        request: CreateCheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        self.record_call(
            "create_checkout_session",
            vec![request.price_id, request.success_url, request.cancel_url],
        );
        self.check_error()?;

        let mut state = self.state();
        state.created += 1;
        let id = format!("cs_mock_{}", state.created);
        state.sessions.insert(
            id.clone(),
            CheckoutSessionStatus {
                id: id.clone(),
                payment_status: PaymentStatus::Unpaid,
                status: CheckoutState::Open,
            },
        );

        Ok(CheckoutSession {
            url: format!("https://checkout.stripe.com/c/pay/{}", id),
            id,
        })
    }

    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSessionStatus, PaymentError> {
        self.record_call("retrieve_checkout_session", vec![session_id.to_string()]);
        self.check_error()?;

        self.state()
            .sessions
            .get(session_id)
            .cloned()
            .ok_or_else(|| PaymentError::not_found("Checkout session"))
    }
}
