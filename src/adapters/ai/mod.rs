//! Image generation adapters.
//!
//! Implementations of the `ImageGenerator` port.
//!
//! ## Available Adapters
//!
//! - `MockImageGenerator` - Configurable mock for testing
//! - `OpenAIImageProvider` - OpenAI image edits (`gpt-image-1`)

mod mock_image_generator;
mod openai_image_provider;

pub use mock_image_generator::{MockImageGenerator, MockOutcome, RecordedCall, MOCK_IMAGE_URL};
pub use openai_image_provider::{OpenAIImageConfig, OpenAIImageProvider};
