//! GetAccountStatusHandler - Query handler for the caller's entitlement view.
//!
//! Pure read: it never touches the entitlement cookies.

use serde::Serialize;

use crate::domain::entitlement::EntitlementState;
use crate::domain::foundation::Identity;

/// Query for the caller's status.
#[derive(Debug, Clone)]
pub struct GetAccountStatusQuery {
    pub identity: Option<Identity>,
    pub subscription_active: bool,
    pub trial_used: bool,
}

/// What the front end needs to pick between upload, sign-in and checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStatus {
    pub logged_in: bool,
    pub subscription_active: bool,
    pub trial_used: bool,
    pub email: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetAccountStatusHandler;

impl GetAccountStatusHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: GetAccountStatusQuery) -> AccountStatus {
        let state = EntitlementState::new(
            query.identity.is_some(),
            query.subscription_active,
            query.trial_used,
        );
        let (email, name, image) = match query.identity {
            Some(identity) => (identity.email, identity.name, identity.image),
            None => (None, None, None),
        };

        AccountStatus {
            logged_in: state.logged_in,
            subscription_active: state.subscription_active,
            trial_used: state.trial_used,
            email,
            name,
            image,
        }
    }
}
