//! Generation - everything about one stylization request that is not I/O.
//!
//! - `style` - named presets and their prompt templates
//! - `upload` - upload policy and validated request construction
//! - `prompt_plan` - the bounded primary/fallback prompt sequence
//! - `image_result` - provider output, resolved to a single representation

mod image_result;
mod prompt_plan;
mod style;
mod upload;

pub use image_result::{GenerationResult, ImageResult};
pub use prompt_plan::{PromptPlan, FALLBACK_PROMPT, MAX_GENERATION_ATTEMPTS};
pub use style::Style;
pub use upload::{
    GenerationRequest, ImageUpload, UploadError, UploadPolicy, ACCEPTED_MIME_PREFIX,
    DEFAULT_MAX_IMAGE_BYTES, MAX_PROMPT_CHARS,
};
