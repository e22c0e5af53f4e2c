//! Image generation provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Image generation provider configuration (OpenAI)
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key
    pub openai_api_key: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Image model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Output image size
    #[serde(default = "default_image_size")]
    pub image_size: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.openai_api_key.is_empty() {
            return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
        }
        if !self.openai_api_key.starts_with("sk-") {
            return Err(ValidationError::InvalidOpenAiKey);
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidUrl("AI_BASE_URL"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            image_size: default_image_size(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-image-1".to_string()
}

fn default_image_size() -> String {
    "1024x1024".to_string()
}

fn default_timeout() -> u64 {
    120
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "gpt-image-1");
        assert_eq!(config.image_size, "1024x1024");
        assert_eq!(config.timeout_secs, 120);
        assert_eq!(config.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 60,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_validation_missing_key() {
        let config = AiConfig::default();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("OPENAI_API_KEY"))
        );
    }

    #[test]
    fn test_validation_wrong_key_prefix() {
        let config = AiConfig {
            openai_api_key: "pk-xxx".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidOpenAiKey));
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = AiConfig {
            openai_api_key: "sk-xxx".to_string(),
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validation_valid_config() {
        let config = AiConfig {
            openai_api_key: "sk-proj-abc".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
