//! Upload limits

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::generation::{UploadPolicy, DEFAULT_MAX_IMAGE_BYTES};

/// Hard upper bound on the configurable ceiling.
const MAX_CONFIGURABLE_IMAGE_BYTES: usize = 50 * 1024 * 1024;

/// Upload configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Largest accepted image in bytes
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,
}

impl UploadConfig {
    /// The policy enforced by the generation endpoint and published to clients.
    pub fn policy(&self) -> UploadPolicy {
        UploadPolicy::new(self.max_image_bytes)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_image_bytes == 0 || self.max_image_bytes > MAX_CONFIGURABLE_IMAGE_BYTES {
            return Err(ValidationError::InvalidUploadCeiling(
                MAX_CONFIGURABLE_IMAGE_BYTES,
            ));
        }
        Ok(())
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: default_max_image_bytes(),
        }
    }
}

fn default_max_image_bytes() -> usize {
    DEFAULT_MAX_IMAGE_BYTES
}
