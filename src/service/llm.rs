//! Thin wrapper around async-openai for advice generation.

use std::{ops::Deref, sync::Arc};

use crate::base::{
    config::Config,
    types::Res,
};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage, ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage, ChatCompletionRequestUserMessageContent,
        CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;
use tracing::{debug, instrument};

// Traits.

/// Generic advice generator trait that clients must implement.
///
/// The generator is an opaque collaborator: it takes a symptom description and
/// returns free-form advice text. Nothing downstream depends on its internals.
#[async_trait]
pub trait GenericAdviceClient {
    /// Generate advice text for a symptom description.
    async fn generate_advice(&self, symptom_description: &str) -> Res<String>;
    /// List the model identifiers available to the configured credentials.
    async fn list_models(&self) -> Res<Vec<String>>;
}

// Structs.

/// Advice client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct AdviceClient {
    inner: Arc<dyn GenericAdviceClient + Send + Sync + 'static>,
}

impl Deref for AdviceClient {
    type Target = dyn GenericAdviceClient + Send + Sync + 'static;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl AdviceClient {
    /// Wrap an arbitrary implementation (used by tests to inject mocks).
    pub fn new(inner: Arc<dyn GenericAdviceClient + Send + Sync + 'static>) -> Self {
        Self { inner }
    }

    pub fn openai(config: &Config) -> Self {
        let client = OpenAiAdviceClient::new(config);
        Self { inner: Arc::new(client) }
    }
}

// Specific implementations.

/// OpenAI advice client implementation.
#[derive(Clone)]
pub struct OpenAiAdviceClient {
    client: Client<OpenAIConfig>,
    model: String,
    system_prompt: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiAdviceClient {
    pub fn new(config: &Config) -> Self {
        let cfg = OpenAIConfig::new().with_api_key(config.openai_api_key.clone());

        Self {
            client: Client::with_config(cfg),
            model: config.openai_model.clone(),
            system_prompt: config.advisor_system_prompt.clone(),
            temperature: config.openai_temperature,
            max_tokens: config.openai_max_tokens,
        }
    }
}

#[async_trait]
impl GenericAdviceClient for OpenAiAdviceClient {
    /// Generate advice text from the system prompt and the symptom description.
    #[instrument(skip(self))]
    async fn generate_advice(&self, symptom_description: &str) -> Res<String> {
        debug!("Generating advice with model `{}`", self.model);

        let messages = vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                content: ChatCompletionRequestSystemMessageContent::Text(self.system_prompt.clone()),
                name: Some("System".to_string()),
            }),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                content: ChatCompletionRequestUserMessageContent::Text(symptom_description.to_string()),
                name: Some("User".to_string()),
            }),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .max_completion_tokens(self.max_tokens)
            .build()?;

        let response = self.client.chat().create(request).await?;
        let advice = response.choices.first().and_then(|choice| choice.message.content.clone()).unwrap_or_default();

        if advice.trim().is_empty() {
            return Err(anyhow::anyhow!("Model `{}` returned no advice.", self.model));
        }

        Ok(advice)
    }

    /// List model identifiers available to the configured API key.
    #[instrument(skip(self))]
    async fn list_models(&self) -> Res<Vec<String>> {
        let response = self.client.models().list().await?;

        let mut models: Vec<String> = response.data.into_iter().map(|m| m.id).collect();
        models.sort();

        Ok(models)
    }
}
