//! HTTP DTOs for checkout endpoints.

use serde::{Deserialize, Serialize};

use crate::application::{VerifyCheckoutQuery, VerifyCheckoutResult};

/// Query string for `GET /api/stripe/verify`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyCheckoutParams {
    #[serde(default)]
    pub session_id: Option<String>,
}

impl From<VerifyCheckoutParams> for VerifyCheckoutQuery {
    fn from(params: VerifyCheckoutParams) -> Self {
        VerifyCheckoutQuery {
            session_id: params.session_id,
        }
    }
}

/// Response for checkout creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    /// Hosted checkout page to redirect the browser to.
    pub url: String,
}

/// Response for checkout verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCheckoutResponse {
    pub subscription_active: bool,
}

impl From<VerifyCheckoutResult> for VerifyCheckoutResponse {
    fn from(result: VerifyCheckoutResult) -> Self {
        Self {
            subscription_active: result.subscription_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_response_serializes_camel_case() {
        let json = serde_json::to_string(&VerifyCheckoutResponse {
            subscription_active: true,
        })
        .unwrap();
        assert_eq!(json, r#"{"subscriptionActive":true}"#);
    }

    #[test]
    fn params_tolerate_missing_session_id() {
        let params: VerifyCheckoutParams = serde_json::from_str("{}").unwrap();
        assert!(VerifyCheckoutQuery::from(params).session_id.is_none());
    }
}
