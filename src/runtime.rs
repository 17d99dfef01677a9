//! Runtime services and shared state for carewise.

use std::path::Path;

use tracing::instrument;

use crate::{
    base::{
        config::Config,
        types::Res,
    },
    interaction::advice::{AdviceOutcome, AdviceRequest, handle_advice_request},
    service::{llm::AdviceClient, report::ReportClient},
    triage::RuleSet,
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the rule set, the advice client, the report client, and
/// configuration. It is designed to be trivially cloneable, allowing it to be
/// passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The triage rule set, built once and read many.
    pub rules: RuleSet,
    /// The advice client instance.
    pub llm: AdviceClient,
    /// The report client instance.
    pub report: ReportClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        // Load the rule set: external file when configured, builtin otherwise.
        let rules = match &config.rules_file {
            Some(path) => RuleSet::from_path(Path::new(path))?,
            None => RuleSet::builtin(),
        };

        // Initialize the advice client.
        let llm = AdviceClient::openai(&config);

        // Initialize the report renderer.
        let report = ReportClient::markdown();

        Ok(Self { config, rules, llm, report })
    }

    /// Handle one advice request.
    pub async fn advise(&self, request: AdviceRequest) -> Res<AdviceOutcome> {
        handle_advice_request(request, &self.config, &self.rules, &self.llm, &self.report).await
    }

    /// List the models available to the configured credentials.
    pub async fn list_models(&self) -> Res<Vec<String>> {
        self.llm.list_models().await
    }
}
