//! Prints a summary line for each configured workout package.
//!
//! Run with:
//! ```
//! WORKOUTS_OUTPUT=json cargo run -p workouts
//! ```

use std::io::{self, Write};

use tracing_subscriber::EnvFilter;
use workouts::prelude::*;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = DriverConfig::from_env()?;
    tracing::info!(
        packages = config.packages.len(),
        on_error = ?config.on_error,
        output = ?config.output,
        "Summarizing workouts"
    );

    let summaries = summarize_packages(&config.packages, config.on_error)?;

    let mut out = io::stdout().lock();
    for summary in &summaries {
        match config.output {
            OutputFormat::Text => writeln!(out, "{}", summary.message())?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(summary)?)?,
        }
    }

    tracing::info!("Done: {} of {} packages", summaries.len(), config.packages.len());

    Ok(())
}
