//! Per-request entitlement snapshot.

use serde::Serialize;

/// Entitlement flags for a single request.
///
/// Never persisted as a unit: each flag has its own storage (identity
/// session, `subscription_active` cookie, `trial_used` cookie) and an absent
/// value reads as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementState {
    pub logged_in: bool,
    pub subscription_active: bool,
    pub trial_used: bool,
}

impl EntitlementState {
    pub fn new(logged_in: bool, subscription_active: bool, trial_used: bool) -> Self {
        Self {
            logged_in,
            subscription_active,
            trial_used,
        }
    }

    /// Snapshot for a caller without an identity session.
    pub fn anonymous(subscription_active: bool, trial_used: bool) -> Self {
        Self::new(false, subscription_active, trial_used)
    }

    /// Snapshot for a signed-in caller.
    pub fn signed_in(subscription_active: bool, trial_used: bool) -> Self {
        Self::new(true, subscription_active, trial_used)
    }
}
