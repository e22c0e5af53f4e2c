//! Upload policy and request validation.
//!
//! A single [`UploadPolicy`] value owns the size ceiling. The generation
//! handler enforces it and `/api/upload-policy` publishes it, so the browser
//! pre-check can never drift from the server check.

use thiserror::Error;

use super::Style;

/// Default upload ceiling: 5 MiB.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Every accepted MIME type starts with this prefix.
pub const ACCEPTED_MIME_PREFIX: &str = "image/";

/// Longest accepted prompt override, in characters.
pub const MAX_PROMPT_CHARS: usize = 4000;

/// Room for multipart boundaries and the small text fields.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Reasons an upload is rejected. `Display` is the client-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("No file provided")]
    MissingFile,

    #[error("Invalid file type")]
    InvalidFileType { mime_type: String },

    #[error("File too large")]
    FileTooLarge { max_bytes: usize },

    #[error("Prompt too long")]
    PromptTooLong { length: usize },

    #[error("Invalid form data")]
    MalformedForm(String),
}

/// An uploaded image as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub file_name: Option<String>,
}

impl ImageUpload {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A generation request that passed validation.
///
/// Only [`UploadPolicy::validate`] builds one, so holding a value means the
/// upload is an image within the ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    image: ImageUpload,
    style: Style,
    prompt_override: Option<String>,
}

impl GenerationRequest {
    pub fn image(&self) -> &ImageUpload {
        &self.image
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn prompt_override(&self) -> Option<&str> {
        self.prompt_override.as_deref()
    }
}

/// Upload limits shared by the server check and the published client policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    max_image_bytes: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IMAGE_BYTES)
    }
}

impl UploadPolicy {
    pub fn new(max_image_bytes: usize) -> Self {
        Self { max_image_bytes }
    }

    pub fn max_image_bytes(&self) -> usize {
        self.max_image_bytes
    }

    /// Request body ceiling for the multipart envelope.
    pub fn body_limit(&self) -> usize {
        self.max_image_bytes + MULTIPART_OVERHEAD_BYTES
    }

    pub fn accepts_mime(mime_type: &str) -> bool {
        mime_type.starts_with(ACCEPTED_MIME_PREFIX)
    }

    /// Validates in fixed order: presence, MIME type, size, prompt length.
    pub fn validate(
        &self,
        image: Option<ImageUpload>,
        style: Option<&str>,
        prompt_override: Option<String>,
    ) -> Result<GenerationRequest, UploadError> {
        let image = image.ok_or(UploadError::MissingFile)?;

        if !Self::accepts_mime(&image.mime_type) {
            return Err(UploadError::InvalidFileType {
                mime_type: image.mime_type,
            });
        }

        if image.len() > self.max_image_bytes {
            return Err(UploadError::FileTooLarge {
                max_bytes: self.max_image_bytes,
            });
        }

        let prompt_override = prompt_override
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        if let Some(prompt) = &prompt_override {
            let length = prompt.chars().count();
            if length > MAX_PROMPT_CHARS {
                return Err(UploadError::PromptTooLong { length });
            }
        }

        Ok(GenerationRequest {
            image,
            style: Style::resolve(style),
            prompt_override,
        })
    }

    /// Error for a file whose body hit the transport limit before it was read.
    ///
    /// The MIME type is known from the part headers, so the type check still
    /// runs ahead of the size check.
    pub fn reject_oversized(&self, mime_type: &str) -> UploadError {
        if Self::accepts_mime(mime_type) {
            UploadError::FileTooLarge {
                max_bytes: self.max_image_bytes,
            }
        } else {
            UploadError::InvalidFileType {
                mime_type: mime_type.to_string(),
            }
        }
    }

    /// Error for a prompt override whose body hit the transport limit.
    ///
    /// An image read ahead of the prompt is still checked first. When no
    /// image has arrived yet the prompt is the only known fault.
    pub fn reject_oversized_prompt(
        &self,
        image: Option<&ImageUpload>,
        received_chars: usize,
    ) -> UploadError {
        match image {
            Some(image) if !Self::accepts_mime(&image.mime_type) => UploadError::InvalidFileType {
                mime_type: image.mime_type.clone(),
            },
            Some(image) if image.len() > self.max_image_bytes => UploadError::FileTooLarge {
                max_bytes: self.max_image_bytes,
            },
            _ => UploadError::PromptTooLong {
                length: received_chars,
            },
        }
    }
}
