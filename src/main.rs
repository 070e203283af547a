//! # chatsum CLI
//!
//! Command-line interface for the chatsum library.

use std::process;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use chatsum::ChatsumError;
use chatsum::cli::Args;
use chatsum::core::batch::BatchRunner;
use chatsum::core::models::Report;
use chatsum::format::{OutputFormat, render};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatsumError> {
    let args = <Args as ClapParser>::parse();
    init_logging(args.log_level())?;

    // Stopword setup is the only fatal step
    let runner = BatchRunner::from_config(args.batch_config())?;
    tracing::debug!(
        stopwords = runner.extractor().stopwords().len(),
        top_n = runner.extractor().top_n(),
        "keyword extractor ready"
    );

    let mut report = Report::new();
    if !args.no_single {
        report = report.with_summary(runner.summarize_file(&args.file));
    }
    if !args.no_batch {
        report = report.with_batch(runner.process_directory(&args.dir));
    }

    let format: OutputFormat = args.format.into();
    if format == OutputFormat::Text {
        println!("📦 chatsum v{}", env!("CARGO_PKG_VERSION"));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }
    print!("{}", render(&report, format)?);

    Ok(())
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides `default_level`.
fn init_logging(default_level: &str) -> Result<(), ChatsumError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| ChatsumError::dependency_init("logging", e.to_string()))
}
