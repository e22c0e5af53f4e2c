//! GenerateImageHandler - Command handler for stylizing an uploaded photo.
//!
//! The upload has already been validated when the command is built. The
//! handler authorizes the caller, then walks the prompt plan against the
//! image provider until one attempt succeeds.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::entitlement::{authorize, DenialReason, EntitlementState};
use crate::domain::generation::{GenerationRequest, GenerationResult, PromptPlan};
use crate::ports::{GenerationError, ImageGenerator};

/// Command to generate a stylized image.
#[derive(Debug, Clone)]
pub struct GenerateImageCommand {
    pub request: GenerationRequest,
    pub entitlement: EntitlementState,
}

/// Result of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateImageResult {
    pub generation: GenerationResult,
    /// Set the trial cookie on this response.
    pub mark_trial_used: bool,
    /// Provider calls made, including the successful one.
    pub attempts: usize,
}

/// Errors from image generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateImageError {
    /// Entitlement check refused the caller. No provider call was made.
    #[error("{0}")]
    Denied(DenialReason),

    /// Every attempt in the prompt plan failed.
    #[error("Generation failed after {attempts} attempts: {last_error}")]
    GenerationFailed {
        attempts: usize,
        last_error: GenerationError,
    },
}

impl GenerateImageError {
    /// Best-effort provider message for the client.
    pub fn details(&self) -> String {
        match self {
            GenerateImageError::Denied(reason) => reason.to_string(),
            GenerateImageError::GenerationFailed { last_error, .. } => last_error.to_string(),
        }
    }
}

/// Handler for generating stylized images.
pub struct GenerateImageHandler {
    generator: Arc<dyn ImageGenerator>,
}

impl GenerateImageHandler {
    pub fn new(generator: Arc<dyn ImageGenerator>) -> Self {
        Self { generator }
    }

    pub async fn handle(
        &self,
        cmd: GenerateImageCommand,
    ) -> Result<GenerateImageResult, GenerateImageError> {
        // 1. Authorize before any provider call
        let mark_trial_used = authorize(&cmd.entitlement).into_result().map_err(|reason| {
            tracing::info!(
                reason = reason.code(),
                logged_in = cmd.entitlement.logged_in,
                "Generation denied"
            );
            GenerateImageError::Denied(reason)
        })?;

        // 2. Walk the prompt plan
        let request = &cmd.request;
        let style = request.style();
        let plan = PromptPlan::new(style, request.prompt_override());
        let provider = self.generator.provider_info();

        let mut last_error = None;
        for (index, prompt) in plan.attempts().into_iter().enumerate() {
            let attempt = index + 1;
            tracing::debug!(
                attempt,
                style = style.id(),
                provider = %provider.name,
                model = %provider.model,
                "Calling image provider"
            );

            match self.generator.generate(request.image(), prompt).await {
                Ok(image) => {
                    tracing::info!(attempt, style = style.id(), mark_trial_used, "Generation succeeded");
                    return Ok(GenerateImageResult {
                        generation: GenerationResult::new(image, style),
                        mark_trial_used,
                        attempts: attempt,
                    });
                }
                Err(err) => {
                    tracing::warn!(attempt, style = style.id(), error = %err, "Generation attempt failed");
                    last_error = Some(err);
                }
            }
        }

        // 3. All attempts exhausted
        let attempts = plan.attempts().len();
        let last_error = last_error
            .unwrap_or_else(|| GenerationError::unavailable("No generation attempts were made"));
        tracing::error!(attempts, error = %last_error, "Generation failed");

        Err(GenerateImageError::GenerationFailed {
            attempts,
            last_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockImageGenerator;
    use crate::domain::generation::{
        ImageUpload, Style, UploadPolicy, FALLBACK_PROMPT, MAX_GENERATION_ATTEMPTS,
    };

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn request(style: &str, prompt: Option<&str>) -> GenerationRequest {
        UploadPolicy::default()
            .validate(
                Some(ImageUpload::new(vec![0xFF, 0xD8, 0xFF, 0xE0], "image/jpeg")),
                Some(style),
                prompt.map(str::to_string),
            )
            .unwrap()
    }

    fn command(entitlement: EntitlementState) -> GenerateImageCommand {
        GenerateImageCommand {
            request: request("ghibli-filmic", None),
            entitlement,
        }
    }

    fn handler(generator: &MockImageGenerator) -> GenerateImageHandler {
        GenerateImageHandler::new(Arc::new(generator.clone()))
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Authorization Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn anonymous_first_use_succeeds_and_marks_trial() {
        let generator = MockImageGenerator::new().with_url("https://img.example.com/a.png");

        let result = handler(&generator)
            .handle(command(EntitlementState::anonymous(false, false)))
            .await
            .unwrap();

        assert!(result.mark_trial_used);
        assert_eq!(result.attempts, 1);
        assert_eq!(result.generation.image_url, "https://img.example.com/a.png");
        assert_eq!(result.generation.style, Style::Filmic);
    }

    #[tokio::test]
    async fn anonymous_with_trial_used_is_denied_without_provider_call() {
        let generator = MockImageGenerator::new();

        let err = handler(&generator)
            .handle(command(EntitlementState::anonymous(false, true)))
            .await
            .unwrap_err();

        assert_eq!(err, GenerateImageError::Denied(DenialReason::TrialUsed));
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn signed_in_without_subscription_is_denied() {
        let generator = MockImageGenerator::new();

        let err = handler(&generator)
            .handle(command(EntitlementState::signed_in(false, false)))
            .await
            .unwrap_err();

        assert_eq!(err, GenerateImageError::Denied(DenialReason::SubscriptionRequired));
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn subscriber_succeeds_without_marking_trial() {
        let generator = MockImageGenerator::new();

        let result = handler(&generator)
            .handle(command(EntitlementState::signed_in(true, true)))
            .await
            .unwrap();

        assert!(!result.mark_trial_used);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Prompt Plan Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn primary_attempt_uses_style_template() {
        let generator = MockImageGenerator::new();

        handler(&generator)
            .handle(command(EntitlementState::signed_in(true, false)))
            .await
            .unwrap();

        assert_eq!(generator.prompts(), vec![Style::Filmic.prompt_template().to_string()]);
    }

    #[tokio::test]
    async fn override_replaces_template_on_primary_attempt() {
        let generator = MockImageGenerator::new();
        let cmd = GenerateImageCommand {
            request: request("ghibli-soft-pastel", Some("a cat bus at dusk")),
            entitlement: EntitlementState::signed_in(true, false),
        };

        let result = handler(&generator).handle(cmd).await.unwrap();

        assert_eq!(generator.prompts(), vec!["a cat bus at dusk".to_string()]);
        assert_eq!(result.generation.style, Style::SoftPastel);
    }

    #[tokio::test]
    async fn primary_failure_falls_back_to_generic_prompt() {
        let generator = MockImageGenerator::new()
            .with_error(GenerationError::ContentRejected("blocked".to_string()))
            .with_inline(vec![1, 2, 3], "image/png");

        let result = handler(&generator)
            .handle(command(EntitlementState::anonymous(false, false)))
            .await
            .unwrap();

        assert_eq!(result.attempts, 2);
        assert_eq!(generator.call_count(), 2);
        assert_eq!(generator.prompts()[1], FALLBACK_PROMPT);
        assert!(result.generation.image_url.starts_with("data:image/png;base64,"));
        assert!(result.mark_trial_used);
    }

    #[tokio::test]
    async fn both_failures_report_last_error() {
        let generator = MockImageGenerator::new()
            .with_error(GenerationError::RateLimited)
            .with_error(GenerationError::malformed("No image URL returned"));

        let err = handler(&generator)
            .handle(command(EntitlementState::anonymous(false, false)))
            .await
            .unwrap_err();

        assert_eq!(generator.call_count(), MAX_GENERATION_ATTEMPTS);
        assert_eq!(
            err,
            GenerateImageError::GenerationFailed {
                attempts: 2,
                last_error: GenerationError::malformed("No image URL returned"),
            }
        );
        assert_eq!(err.details(), "malformed provider response: No image URL returned");
    }

    #[tokio::test]
    async fn never_exceeds_attempt_budget() {
        let generator = MockImageGenerator::new()
            .with_error(GenerationError::RateLimited)
            .with_error(GenerationError::RateLimited)
            .with_error(GenerationError::RateLimited);

        let _ = handler(&generator)
            .handle(command(EntitlementState::signed_in(true, false)))
            .await;

        assert_eq!(generator.call_count(), MAX_GENERATION_ATTEMPTS);
    }
}
