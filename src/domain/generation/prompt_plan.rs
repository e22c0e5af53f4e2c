//! Prompt sequence for a generation request.
//!
//! A request gets exactly one retry: the primary prompt first, then a fixed
//! generic prompt that providers are less likely to reject.

use super::Style;

/// Upper bound on provider calls per request.
pub const MAX_GENERATION_ATTEMPTS: usize = 2;

/// Generic prompt used for the single retry.
pub const FALLBACK_PROMPT: &str =
    "A portrait of a person as a hand-drawn animated film character, soft natural colors, \
     gentle lighting, simple painted background.";

/// Ordered prompts to try for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPlan {
    primary: String,
}

impl PromptPlan {
    /// Builds the plan; an override replaces the style template for the primary attempt.
    pub fn new(style: Style, prompt_override: Option<&str>) -> Self {
        let primary = prompt_override
            .map(str::to_string)
            .unwrap_or_else(|| style.prompt_template().to_string());
        Self { primary }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn attempts(&self) -> [&str; MAX_GENERATION_ATTEMPTS] {
        [self.primary.as_str(), FALLBACK_PROMPT]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_has_exactly_one_retry() {
        let plan = PromptPlan::new(Style::Filmic, None);
        assert_eq!(plan.attempts().len(), 2);
    }

    #[test]
    fn primary_uses_style_template() {
        let plan = PromptPlan::new(Style::Filmic, None);
        assert_eq!(plan.attempts()[0], Style::Filmic.prompt_template());
        assert_eq!(plan.attempts()[1], FALLBACK_PROMPT);
    }

    #[test]
    fn override_replaces_primary_only() {
        let plan = PromptPlan::new(Style::Inspired, Some("a cat on a bicycle"));
        assert_eq!(plan.primary(), "a cat on a bicycle");
        assert_eq!(plan.attempts()[1], FALLBACK_PROMPT);
    }
}
