//! Library root for `carewise`.
//!
//! Carewise is an OpenAI-backed symptom advice assistant designed to:
//! - Take a free-text symptom description (typed or transcribed)
//! - Generate advice text via a hosted generative model
//! - Suggest a possible condition via a deterministic keyword triage rule set
//! - Optionally export the exchange as a report
//!
//! The triage rule engine is the in-process core; the advice generator and the
//! report renderer are narrow trait seams with swappable implementations.

#[deny(missing_docs)]
pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;
pub mod triage;

pub mod prelude;

use base::{config::Config, types::Res};
use interaction::advice::{AdviceOutcome, AdviceRequest};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Builds the runtime (rule set, advice client, report renderer) and handles
/// one advice request end to end.
pub async fn start(config: Config, request: AdviceRequest) -> Res<AdviceOutcome> {
    info!("Starting carewise ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config)?;

    // Handle the request.
    runtime.advise(request).await
}

/// List the model identifiers available to the configured credentials.
pub async fn list_models(config: Config) -> Res<Vec<String>> {
    let runtime = runtime::Runtime::new(config)?;

    runtime.list_models().await
}
