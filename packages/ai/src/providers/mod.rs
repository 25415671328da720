//! LLM provider abstraction and implementations.
//!
//! Supports Anthropic Claude and `OpenAI`-compatible servers via a common
//! trait. The question engine only needs single-turn text completion, so
//! the trait surface is one `chat` call.

pub mod anthropic;
pub mod openai;

use crate::AiError;

/// Trait for LLM providers.
#[async_trait::async_trait]
pub trait LlmProvider: Send + Sync {
    /// Sends a single-turn chat request and returns the model's text.
    ///
    /// # Errors
    ///
    /// Returns [`AiError`] if the request fails.
    async fn chat(&self, system_prompt: &str, question: &str) -> Result<String, AiError>;
}

/// Snapshot of the environment variables that drive provider selection.
#[derive(Debug, Default)]
struct ProviderEnv {
    provider: Option<String>,
    anthropic_key: Option<String>,
    openai_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
}

impl ProviderEnv {
    fn from_process() -> Self {
        Self {
            provider: std::env::var("AI_PROVIDER").ok(),
            anthropic_key: std::env::var("ANTHROPIC_API_KEY").ok(),
            openai_key: std::env::var("OPENAI_API_KEY").ok(),
            model: std::env::var("AI_MODEL").ok(),
            base_url: std::env::var("AI_BASE_URL").ok(),
        }
    }
}

/// Resolved provider configuration, ready to construct a client from.
#[derive(Debug, PartialEq, Eq)]
enum ProviderSelection {
    Anthropic {
        api_key: String,
        model: String,
    },
    OpenAi {
        api_key: String,
        model: String,
        base_url: String,
    },
}

/// Resolves which provider to use from an environment snapshot.
///
/// An explicit `AI_PROVIDER` wins; otherwise the first available credential
/// decides, checking `ANTHROPIC_API_KEY` before `OPENAI_API_KEY`.
fn select_provider(env: &ProviderEnv) -> Result<ProviderSelection, AiError> {
    let provider = env
        .provider
        .clone()
        .unwrap_or_else(|| detect_provider(env));

    match provider.to_lowercase().as_str() {
        "anthropic" | "claude" => {
            let api_key = env.anthropic_key.clone().ok_or_else(|| AiError::Config {
                message: "ANTHROPIC_API_KEY environment variable not set".to_string(),
            })?;
            let model = env
                .model
                .clone()
                .unwrap_or_else(|| "claude-sonnet-4-20250514".to_string());
            Ok(ProviderSelection::Anthropic { api_key, model })
        }
        "openai" | "gpt" => {
            let api_key = env.openai_key.clone().ok_or_else(|| AiError::Config {
                message: "OPENAI_API_KEY environment variable not set".to_string(),
            })?;
            let model = env.model.clone().unwrap_or_else(|| "gpt-4o".to_string());
            let base_url = env
                .base_url
                .clone()
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string());
            Ok(ProviderSelection::OpenAi {
                api_key,
                model,
                base_url,
            })
        }
        other => Err(AiError::Config {
            message: format!("Unknown AI provider: {other}. Use 'anthropic' or 'openai'."),
        }),
    }
}

/// Auto-detects which provider to use based on available credentials.
///
/// Returns a provider name string that matches the arms in
/// [`select_provider`].
fn detect_provider(env: &ProviderEnv) -> String {
    if env.anthropic_key.is_some() {
        log::info!("Auto-detected AI provider: Anthropic (ANTHROPIC_API_KEY found)");
        return "anthropic".to_string();
    }

    if env.openai_key.is_some() {
        log::info!("Auto-detected AI provider: OpenAI (OPENAI_API_KEY found)");
        return "openai".to_string();
    }

    log::warn!(
        "No AI credentials detected. Set ANTHROPIC_API_KEY or OPENAI_API_KEY, \
         or set AI_PROVIDER explicitly."
    );

    // Fall back to anthropic — will produce a clear error about missing key
    "anthropic".to_string()
}

/// Creates an LLM provider based on environment variables.
///
/// If `AI_PROVIDER` is explicitly set, uses that provider. Otherwise
/// auto-detects from available credentials:
///
/// 1. `ANTHROPIC_API_KEY` set -> Anthropic Claude
/// 2. `OPENAI_API_KEY` set -> `OpenAI`
///
/// `AI_MODEL` overrides the default model; `AI_BASE_URL` points the
/// `OpenAI` provider at a compatible self-hosted server.
///
/// # Errors
///
/// Returns [`AiError::Config`] if no credentials are found or the
/// explicitly requested provider is not configured.
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, AiError> {
    match select_provider(&ProviderEnv::from_process())? {
        ProviderSelection::Anthropic { api_key, model } => {
            Ok(Box::new(anthropic::AnthropicProvider::new(api_key, model)))
        }
        ProviderSelection::OpenAi {
            api_key,
            model,
            base_url,
        } => Ok(Box::new(openai::OpenAiProvider::new(
            api_key, model, base_url,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(
        provider: Option<&str>,
        anthropic_key: Option<&str>,
        openai_key: Option<&str>,
    ) -> ProviderEnv {
        ProviderEnv {
            provider: provider.map(ToString::to_string),
            anthropic_key: anthropic_key.map(ToString::to_string),
            openai_key: openai_key.map(ToString::to_string),
            ..ProviderEnv::default()
        }
    }

    #[test]
    fn explicit_provider_overrides_detection() {
        let selection =
            select_provider(&env(Some("openai"), Some("a-key"), Some("o-key"))).unwrap();

        assert_eq!(
            selection,
            ProviderSelection::OpenAi {
                api_key: "o-key".to_string(),
                model: "gpt-4o".to_string(),
                base_url: "https://api.openai.com/v1".to_string(),
            }
        );
    }

    #[test]
    fn anthropic_credential_wins_detection_order() {
        let selection = select_provider(&env(None, Some("a-key"), Some("o-key"))).unwrap();

        assert!(matches!(selection, ProviderSelection::Anthropic { .. }));
    }

    #[test]
    fn openai_credential_detected_when_anthropic_absent() {
        let selection = select_provider(&env(None, None, Some("o-key"))).unwrap();

        assert!(matches!(selection, ProviderSelection::OpenAi { .. }));
    }

    #[test]
    fn missing_credential_for_explicit_provider_is_config_error() {
        let err = select_provider(&env(Some("claude"), None, Some("o-key"))).unwrap_err();

        assert!(matches!(err, AiError::Config { ref message }
            if message.contains("ANTHROPIC_API_KEY")));
    }

    #[test]
    fn no_credentials_at_all_is_config_error() {
        let err = select_provider(&env(None, None, None)).unwrap_err();

        assert!(matches!(err, AiError::Config { .. }));
    }

    #[test]
    fn unknown_provider_name_is_rejected() {
        let err = select_provider(&env(Some("bedrock"), Some("a-key"), None)).unwrap_err();

        assert!(matches!(err, AiError::Config { ref message }
            if message.contains("Unknown AI provider")));
    }

    #[test]
    fn model_and_base_url_overrides_are_respected() {
        let snapshot = ProviderEnv {
            provider: Some("openai".to_string()),
            openai_key: Some("o-key".to_string()),
            model: Some("llama-3.1-70b".to_string()),
            base_url: Some("http://localhost:11434/v1".to_string()),
            ..ProviderEnv::default()
        };

        assert_eq!(
            select_provider(&snapshot).unwrap(),
            ProviderSelection::OpenAi {
                api_key: "o-key".to_string(),
                model: "llama-3.1-70b".to_string(),
                base_url: "http://localhost:11434/v1".to_string(),
            }
        );
    }
}
