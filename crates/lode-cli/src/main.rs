//! The CI entry point.
//!
//! Reads a fixed TypeScript source file, extracts the `LOG_INTEGRATIONS`
//! constant, and prints its value as one line of JSON on stdout. All
//! diagnostics go to stderr so the pipeline step can consume stdout as-is.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lode_core::{extract_value, LodeErrorCode};

/// Where the constant lives, relative to the host repository root.
const SOURCE_PATH: &str = "src/logs/integrations.ts";

/// The one identifier this tool knows how to extract.
const CONSTANT_NAME: &str = "LOG_INTEGRATIONS";

fn main() -> ExitCode {
    init_logging();

    // A positional path overrides the default for local runs; the target
    // identifier is deliberately not configurable.
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SOURCE_PATH));

    tracing::debug!(path = %path.display(), name = CONSTANT_NAME, "starting extraction");

    match extract_value(&path, CONSTANT_NAME) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[{}] {e}", e.error_code());
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
