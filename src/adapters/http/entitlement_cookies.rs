//! Cookie-backed entitlement flags.
//!
//! `trial_used` and `subscription_active` live in signed, httpOnly cookies.
//! A missing cookie, a tampered one, or any value other than `"true"` reads
//! as `false`.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use time::Duration;

use crate::domain::entitlement::EntitlementState;

pub const TRIAL_COOKIE: &str = "trial_used";
pub const SUBSCRIPTION_COOKIE: &str = "subscription_active";

const TRIAL_MAX_AGE: Duration = Duration::days(365);
const SUBSCRIPTION_MAX_AGE: Duration = Duration::days(30);

/// Reads and writes the entitlement cookies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitlementCookies {
    secure: bool,
}

impl EntitlementCookies {
    /// `secure` adds the `Secure` attribute; set it in production.
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// Builds the request's entitlement state from the cookies and sign-in status.
    pub fn state(&self, jar: &SignedCookieJar, logged_in: bool) -> EntitlementState {
        EntitlementState::new(
            logged_in,
            Self::flag(jar, SUBSCRIPTION_COOKIE),
            Self::flag(jar, TRIAL_COOKIE),
        )
    }

    pub fn mark_trial_used(&self, jar: SignedCookieJar) -> SignedCookieJar {
        tracing::debug!("Setting trial_used cookie");
        jar.add(self.flag_cookie(TRIAL_COOKIE, TRIAL_MAX_AGE))
    }

    pub fn activate_subscription(&self, jar: SignedCookieJar) -> SignedCookieJar {
        tracing::debug!("Setting subscription_active cookie");
        jar.add(self.flag_cookie(SUBSCRIPTION_COOKIE, SUBSCRIPTION_MAX_AGE))
    }

    fn flag(jar: &SignedCookieJar, name: &str) -> bool {
        jar.get(name).is_some_and(|cookie| cookie.value() == "true")
    }

    fn flag_cookie(&self, name: &'static str, max_age: Duration) -> Cookie<'static> {
        Cookie::build((name, "true"))
            .http_only(true)
            .same_site(SameSite::Lax)
            .path("/")
            .secure(self.secure)
            .max_age(max_age)
            .build()
    }
}
