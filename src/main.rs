//! Headless runner: analyze one contract document from the command line.
//!
//! Usage: `dealscan <path-to-image-or-pdf>`
//!
//! Reads `GEMINI_API_KEY` (and optional `DEALSCAN_*` overrides) from the
//! environment or a `.env` file, runs one analysis, and prints the outcome
//! envelope as JSON. Exits non-zero when the analysis fails.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use dealscan::{media, ContractAnalyzer, UploadedFile};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,dealscan=info")),
        )
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: dealscan <path-to-image-or-pdf>");
        return ExitCode::FAILURE;
    };

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("failed to read {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Declared type comes from the extension; fall back to content sniffing
    // for extensionless uploads.
    let media_type = mime_guess::from_path(&path)
        .first_raw()
        .map(str::to_string)
        .or_else(|| media::detect_media_type(&bytes).map(str::to_string))
        .unwrap_or_default();

    let file = UploadedFile::new(media_type, bytes).with_name(path.as_str());

    let analyzer = match ContractAnalyzer::from_env() {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("failed to initialize model client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = analyzer.analyze(Some(&file)).await;

    match serde_json::to_string_pretty(&outcome) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("failed to serialize outcome: {e}");
            return ExitCode::FAILURE;
        }
    }

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
