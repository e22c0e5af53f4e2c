//! The entitlement decision.

use thiserror::Error;

use super::EntitlementState;

/// Outcome of [`authorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The caller may generate.
    ///
    /// `must_mark_trial_used` is an obligation for the caller: it must be
    /// applied on the response that carries a successful generation and on
    /// no other response.
    Allow { must_mark_trial_used: bool },

    /// The caller may not generate.
    Deny(DenialReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow { .. })
    }

    /// Converts to a `Result`, yielding the trial obligation on success.
    pub fn into_result(self) -> Result<bool, DenialReason> {
        match self {
            Decision::Allow {
                must_mark_trial_used,
            } => Ok(must_mark_trial_used),
            Decision::Deny(reason) => Err(reason),
        }
    }
}

/// Why a generation was refused.
///
/// The `Display` text is the user-facing message; [`DenialReason::code`] is
/// the machine-readable reason the front end branches on (login vs checkout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DenialReason {
    /// Anonymous caller already spent the free generation.
    #[error("Trial used, please subscribe")]
    TrialUsed,

    /// Signed-in caller without an active subscription.
    #[error("Subscription required")]
    SubscriptionRequired,
}

impl DenialReason {
    pub fn code(&self) -> &'static str {
        match self {
            DenialReason::TrialUsed => "trial_used",
            DenialReason::SubscriptionRequired => "subscription_required",
        }
    }
}

/// Decides whether a generation request is authorized.
///
/// Signed-in callers are governed only by `subscription_active`; the trial
/// flag is consulted for anonymous callers only.
pub fn authorize(state: &EntitlementState) -> Decision {
    if state.logged_in {
        if state.subscription_active {
            Decision::Allow {
                must_mark_trial_used: false,
            }
        } else {
            Decision::Deny(DenialReason::SubscriptionRequired)
        }
    } else if state.trial_used {
        Decision::Deny(DenialReason::TrialUsed)
    } else {
        Decision::Allow {
            must_mark_trial_used: true,
        }
    }
}
