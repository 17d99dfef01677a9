//! The advice request flow: generate, classify, optionally report.

use std::path::PathBuf;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    base::{config::Config, types::Res},
    service::{
        llm::AdviceClient,
        report::{AdviceReport, ReportClient},
    },
    triage::{ClassificationResult, RuleSet},
};

/// A single advice request.
///
/// All per-request state travels in this value; handlers hold no globals.
#[derive(Debug, Clone)]
pub struct AdviceRequest {
    /// The symptom description, typed or transcribed.
    pub symptom_text: String,
    /// Where to write the report, if the user asked for one.
    pub report_path: Option<PathBuf>,
}

/// The outcome of a completed advice request.
#[derive(Debug, Clone, Serialize)]
pub struct AdviceOutcome {
    /// The advice text returned by the generator.
    pub advice: String,
    /// The triage classifier's verdict.
    pub classification: ClassificationResult,
    /// The report path, when a report was written.
    pub report_path: Option<PathBuf>,
}

/// Handle one advice request end to end.
///
/// The classifier runs over the user's original symptom text by default; the
/// `classify_advice` config flag switches it to the generated advice text
/// instead. A `NoMatch` classification is a normal outcome and flows through
/// unchanged.
#[instrument(skip_all)]
pub async fn handle_advice_request(request: AdviceRequest, config: &Config, rules: &RuleSet, llm: &AdviceClient, report: &ReportClient) -> Res<AdviceOutcome> {
    let symptom_text = request.symptom_text.trim();

    if symptom_text.is_empty() {
        return Err(anyhow::anyhow!("Please enter or speak your symptoms for analysis."));
    }

    // Call the advice generator.

    let advice = llm.generate_advice(symptom_text).await?;

    // Classify. The rules were written against symptom descriptions, so that is
    // the default input; `classify_advice` restores the legacy behavior of
    // scanning the generated prose.

    let classification_input = if config.classify_advice { advice.as_str() } else { symptom_text };
    let classification = rules.classify(classification_input);

    if let Some(label) = classification.label() {
        info!("Possible condition detected: {}", label);
    } else {
        info!("No condition suggested.");
    }

    // Render the report, if requested.

    if let Some(path) = &request.report_path {
        let advice_report = AdviceReport {
            symptom_description: symptom_text.to_string(),
            advice: advice.clone(),
            condition: classification.label().map(str::to_string),
            generated_at: Utc::now(),
        };

        report.render(&advice_report, path)?;
    }

    Ok(AdviceOutcome {
        advice,
        classification,
        report_path: request.report_path,
    })
}
