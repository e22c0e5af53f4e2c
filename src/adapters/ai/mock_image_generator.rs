//! Mock image generator for testing.
//!
//! Provides a configurable mock implementation of the `ImageGenerator` port,
//! allowing tests to run without calling a real image API.
//!
//! # Example
//!
//! ```ignore
//! let generator = MockImageGenerator::new()
//!     .with_error(GenerationError::RateLimited)
//!     .with_url("https://img.example.com/out.png");
//!
//! // First call fails, second succeeds.
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::generation::{ImageResult, ImageUpload};
use crate::ports::{GenerationError, ImageGenerator, ProviderInfo};

/// Default image returned when no outcome is queued.
pub const MOCK_IMAGE_URL: &str = "https://images.mock.local/generated.png";

/// A configured mock outcome.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Success(ImageResult),
    Error(GenerationError),
}

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub prompt: String,
    pub mime_type: String,
    pub image_len: usize,
}

/// Mock image generator for testing.
///
/// Outcomes are consumed in order; once exhausted every call succeeds with
/// [`MOCK_IMAGE_URL`].
#[derive(Debug, Clone)]
pub struct MockImageGenerator {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    delay: Duration,
}

impl Default for MockImageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockImageGenerator {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            delay: Duration::ZERO,
        }
    }

    /// Queues a hosted-URL result.
    pub fn with_url(self, url: impl Into<String>) -> Self {
        self.push(MockOutcome::Success(ImageResult::Url(url.into())))
    }

    /// Queues an inline-bytes result.
    pub fn with_inline(self, bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        self.push(MockOutcome::Success(ImageResult::InlineData {
            bytes,
            mime_type: mime_type.into(),
        }))
    }

    /// Queues an error.
    pub fn with_error(self, error: GenerationError) -> Self {
        self.push(MockOutcome::Error(error))
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this generator.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    /// Prompts in call order.
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.calls).iter().map(|c| c.prompt.clone()).collect()
    }

    fn push(self, outcome: MockOutcome) -> Self {
        lock(&self.outcomes).push_back(outcome);
        self
    }

    fn next_outcome(&self) -> MockOutcome {
        lock(&self.outcomes)
            .pop_front()
            .unwrap_or_else(|| MockOutcome::Success(ImageResult::Url(MOCK_IMAGE_URL.to_string())))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate(
        &self,
        image: &ImageUpload,
        prompt: &str,
    ) -> Result<ImageResult, GenerationError> {
        lock(&self.calls).push(RecordedCall {
            prompt: prompt.to_string(),
            mime_type: image.mime_type.clone(),
            image_len: image.len(),
        });

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_outcome() {
            MockOutcome::Success(result) => Ok(result),
            MockOutcome::Error(error) => Err(error),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock-image-1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> ImageUpload {
        ImageUpload::new(vec![0xFF, 0xD8, 0xFF], "image/jpeg")
    }

    #[tokio::test]
    async fn returns_default_url_when_nothing_queued() {
        let generator = MockImageGenerator::new();

        let result = generator.generate(&image(), "prompt").await.unwrap();
        assert_eq!(result, ImageResult::Url(MOCK_IMAGE_URL.to_string()));
    }

    #[tokio::test]
    async fn returns_outcomes_in_order() {
        let generator = MockImageGenerator::new()
            .with_error(GenerationError::RateLimited)
            .with_inline(vec![1, 2], "image/png");

        assert_eq!(
            generator.generate(&image(), "a").await,
            Err(GenerationError::RateLimited)
        );
        assert!(matches!(
            generator.generate(&image(), "b").await,
            Ok(ImageResult::InlineData { .. })
        ));
    }

    #[tokio::test]
    async fn records_prompts_and_upload_shape() {
        let generator = MockImageGenerator::new();

        generator.generate(&image(), "first").await.unwrap();
        generator.generate(&image(), "second").await.unwrap();

        assert_eq!(generator.call_count(), 2);
        assert_eq!(generator.prompts(), vec!["first", "second"]);
        assert_eq!(generator.calls()[0].mime_type, "image/jpeg");
        assert_eq!(generator.calls()[0].image_len, 3);
    }

    #[tokio::test]
    async fn clones_share_call_log() {
        let generator = MockImageGenerator::new();
        let clone = generator.clone();

        clone.generate(&image(), "x").await.unwrap();
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn respects_delay() {
        let generator = MockImageGenerator::new().with_delay(Duration::from_millis(20));

        let start = std::time::Instant::now();
        generator.generate(&image(), "x").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
