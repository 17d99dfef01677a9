//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use crate::base::prompts;

use super::types::Res;

/// Default OpenAI model used for advice generation.
fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

/// Default sampling temperature for the advice model.
fn default_openai_temperature() -> f32 {
    0.7
}

/// Default max output tokens for the advice model.
fn default_openai_max_tokens() -> u32 {
    1024
}

/// Default system prompt for the advice generator.
fn default_advisor_system_prompt() -> String {
    prompts::ADVISOR_SYSTEM_PROMPT.to_string()
}

/// Configuration for the carewise application.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Shared inner configuration values.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Inner configuration values for the carewise application.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// OpenAI API key (`CAREWISE_OPENAI_API_KEY`). Supplied via environment or
    /// config file, never embedded in source.
    pub openai_api_key: String,
    /// OpenAI model to use for advice generation (`CAREWISE_OPENAI_MODEL`).
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    /// Optional custom system prompt to override the default (`CAREWISE_ADVISOR_SYSTEM_PROMPT`).
    #[serde(default = "default_advisor_system_prompt")]
    pub advisor_system_prompt: String,
    /// Sampling temperature for the advice model (`CAREWISE_OPENAI_TEMPERATURE`).
    /// Value between 0 and 2. Higher values like 0.8 make output more random,
    /// while lower values like 0.2 make it more focused and deterministic.
    #[serde(default = "default_openai_temperature")]
    pub openai_temperature: f32,
    /// Max output tokens for the advice model (`CAREWISE_OPENAI_MAX_TOKENS`).
    #[serde(default = "default_openai_max_tokens")]
    pub openai_max_tokens: u32,
    /// Optional path to a triage rules file (`CAREWISE_RULES_FILE`).
    /// When unset, the built-in rule set is used.
    #[serde(default)]
    pub rules_file: Option<String>,
    /// Run the triage classifier over the generated advice text instead of the
    /// user's original symptom description (`CAREWISE_CLASSIFY_ADVICE`).
    /// Off by default: the symptom description is the text the rules were
    /// written against.
    #[serde(default)]
    pub classify_advice: bool,
}

impl Config {
    /// Load configuration from the environment and an optional config file.
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("CAREWISE"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new("carewise.toml").exists() {
            cfg = cfg.add_source(config::File::with_name("carewise"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        if result.openai_temperature < 0.0 || result.openai_temperature > 2.0 {
            return Err(anyhow::anyhow!("OpenAI temperature must be between 0 and 2."));
        }

        if result.openai_max_tokens < 1 || result.openai_max_tokens > 128000 {
            return Err(anyhow::anyhow!("OpenAI max tokens must be between 1 and 128000."));
        }

        Ok(result)
    }
}
