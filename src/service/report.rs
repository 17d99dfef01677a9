//! Report rendering for completed advice exchanges.

use std::{ops::Deref, path::Path, sync::Arc};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument};

use crate::base::types::Void;

// Types.

/// A completed exchange, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct AdviceReport {
    /// The user's symptom description as entered.
    pub symptom_description: String,
    /// The advice text returned by the generator.
    pub advice: String,
    /// The triage classifier's suggested condition, if any.
    pub condition: Option<String>,
    /// When the exchange completed.
    pub generated_at: DateTime<Utc>,
}

// Traits.

/// Generic report renderer trait.
///
/// The renderer has no contract beyond accepting the exchange and an output
/// path; the condition slot may be empty and must render as a normal outcome,
/// not a failure.
pub trait GenericReportRenderer {
    /// Render the report to the given path.
    fn render(&self, report: &AdviceReport, path: &Path) -> Void;
}

// Structs.

/// Report client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ReportClient {
    inner: Arc<dyn GenericReportRenderer + Send + Sync + 'static>,
}

impl Deref for ReportClient {
    type Target = dyn GenericReportRenderer + Send + Sync + 'static;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ReportClient {
    /// Wrap an arbitrary implementation (used by tests to inject mocks).
    pub fn new(inner: Arc<dyn GenericReportRenderer + Send + Sync + 'static>) -> Self {
        Self { inner }
    }

    pub fn markdown() -> Self {
        Self { inner: Arc::new(MarkdownReportRenderer) }
    }
}

// Specific implementations.

/// Markdown report renderer.
///
/// Emits the same sections the historical PDF export had: title, date, symptom
/// description, advice, and the possible-condition note.
#[derive(Debug, Clone, Default)]
pub struct MarkdownReportRenderer;

impl GenericReportRenderer for MarkdownReportRenderer {
    #[instrument(skip(self, report))]
    fn render(&self, report: &AdviceReport, path: &Path) -> Void {
        let condition_line = match &report.condition {
            Some(label) => format!("Possible condition detected: **{label}**"),
            None => "No condition suggested.".to_string(),
        };

        let body = format!(
            "# CareWise - Medical Advice Report\n\n\
             Date: {}\n\n\
             ## Symptom Description\n\n\
             {}\n\n\
             ## AI Medical Advice\n\n\
             {}\n\n\
             ## Triage\n\n\
             {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S"),
            report.symptom_description,
            report.advice,
            condition_line,
        );

        std::fs::write(path, body)?;

        info!("Report written to {}.", path.display());

        Ok(())
    }
}
