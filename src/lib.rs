//! dealscan: AI-assisted analysis of vehicle purchase contracts.
//!
//! Upload an image or PDF of a purchase contract, get back extracted terms,
//! flagged issues, a 0-100 trustworthiness score, and a summary. Document
//! understanding is delegated to an external generative model; this crate
//! is the validation-and-orchestration layer around that single call.
//!
//! ```no_run
//! use std::sync::Arc;
//! use dealscan::{ContractAnalyzer, GeminiClient, ModelConfig, UploadedFile};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(ModelConfig::from_env())?;
//! let analyzer = ContractAnalyzer::new(Arc::new(client));
//!
//! let file = UploadedFile::new("application/pdf", std::fs::read("contract.pdf")?);
//! let outcome = analyzer.analyze(Some(&file)).await;
//! println!("{}", serde_json::to_string_pretty(&outcome)?);
//! # Ok(())
//! # }
//! ```

mod ai;
mod config;
mod error;
pub mod media;
mod validation;

pub use ai::{
    AnalysisOutcome, AnalysisReport, ContractAnalyzer, ContractTerm, GeminiClient,
    GenerativeModel, InlineDocument, IssueSeverity, PotentialIssue, ScoreBand, TermFlag,
    CONTRACT_AUDIT_PROMPT,
};
pub use config::ModelConfig;
pub use error::{AnalysisError, ModelError, ValidationError};
pub use validation::{is_supported_media_type, validate, UploadedFile, MAX_UPLOAD_BYTES};
