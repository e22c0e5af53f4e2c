//! HTTP DTOs for generation endpoints.
//!
//! The generate request arrives as multipart form data (`file`, `style`,
//! optional `prompt`) and is read field by field in the handler, so only the
//! JSON response shapes live here. A successful generation serializes
//! [`GenerationResult`](crate::domain::generation::GenerationResult) directly.

use serde::{Deserialize, Serialize};

use crate::domain::generation::{UploadPolicy, ACCEPTED_MIME_PREFIX};

/// Multipart field carrying the photo.
pub const FILE_FIELD: &str = "file";

/// Multipart field carrying the style identifier.
pub const STYLE_FIELD: &str = "style";

/// Multipart field carrying the optional prompt override.
pub const PROMPT_FIELD: &str = "prompt";

/// Upload limits for client-side pre-validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPolicyResponse {
    pub max_bytes: usize,
    pub accepted_mime_prefix: String,
}

impl From<UploadPolicy> for UploadPolicyResponse {
    fn from(policy: UploadPolicy) -> Self {
        Self {
            max_bytes: policy.max_image_bytes(),
            accepted_mime_prefix: ACCEPTED_MIME_PREFIX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_policy_serializes_camel_case() {
        let response = UploadPolicyResponse::from(UploadPolicy::new(1024));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["maxBytes"], 1024);
        assert_eq!(json["acceptedMimePrefix"], "image/");
    }
}
