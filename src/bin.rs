//! Binary entry point for `carewise`.
//!
//! This module provides the command-line interface for carewise with options
//! for configuration file paths, logging verbosity, report export, and model
//! listing. It initializes the necessary components and runs one advice
//! exchange.

use std::io::Read;

use carewise::{
    base::{config::Config, types::Void},
    interaction::advice::AdviceRequest,
};
use clap::Parser;
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// Carewise – a symptom advice and triage helper.
///
/// Configuration can come from `carewise.toml` or environment variables
/// prefixed with `CAREWISE`. The tool sends your symptom description to a
/// hosted model for advice, runs the local triage rules over it, and can
/// export the exchange as a Markdown report.
#[derive(Parser, Debug)]
#[command(version, author, about, long_about = None)]
struct Args {
    /// The symptom description. Read from stdin when omitted.
    symptoms: Option<String>,
    /// Override the config file path (optional).
    ///
    /// By default, the tool will look for a config file at `carewise.toml`
    /// in the current directory.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Write the exchange as a Markdown report to this path.
    #[arg(short, long)]
    report: Option<std::path::PathBuf>,
    /// Print the outcome as JSON instead of prose.
    #[arg(long)]
    json: bool,
    /// List the models available to the configured credentials, then exit.
    #[arg(long)]
    list_models: bool,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: INFO level
    /// - -v: DEBUG level
    /// - -vv or more: TRACE level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Main entry point for the carewise binary.
///
/// Sets up logging based on verbosity, loads configuration, and runs the
/// requested operation.
#[tokio::main]
async fn main() -> Void {
    let args = Args::parse();

    // Construct the level filter.

    let level = match args.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Prepare the log layer.

    let stdout = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);

    tracing_subscriber::registry().with(level_filter).with(stdout).init();

    let config = Config::load(args.config.as_deref())?;

    if args.list_models {
        let models = carewise::list_models(config).await?;

        for model in models {
            println!("{model}");
        }

        return Ok(());
    }

    // Take the symptom description from the argument, or fall back to stdin.

    let symptom_text = match args.symptoms {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let request = AdviceRequest {
        symptom_text,
        report_path: args.report,
    };

    let outcome = carewise::start(config, request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("AI's Suggestion:\n\n{}\n", outcome.advice.trim());

        match outcome.classification.label() {
            Some(label) => println!("Possible condition detected: {label}"),
            None => println!("No condition suggested."),
        }

        if let Some(path) = &outcome.report_path {
            println!("Report written to {}.", path.display());
        }
    }

    Ok(())
}
