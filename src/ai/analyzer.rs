//! Analysis orchestrator
//!
//! Turns one validated upload into a structured report, or a classified
//! failure. The whole pipeline is sequential: validate, prepare, encode,
//! one model call, extract, parse, enforce. Every buffer is scoped to the
//! call; nothing is cached between requests.

use std::sync::Arc;
use std::time::Instant;

use base64::Engine;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ModelConfig;
use crate::error::AnalysisError;
use crate::media;
use crate::validation::{self, UploadedFile};

use super::extract::extract_json_candidate;
use super::gemini::GeminiClient;
use super::outcome::AnalysisOutcome;
use super::prompts::CONTRACT_AUDIT_PROMPT;
use super::provider::{GenerativeModel, InlineDocument};
use super::report::AnalysisReport;

/// Orchestrates contract analysis over an injected model collaborator.
pub struct ContractAnalyzer {
    model: Arc<dyn GenerativeModel>,
}

impl ContractAnalyzer {
    /// Build an analyzer over any model collaborator.
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Build an analyzer over a [`GeminiClient`] configured from the
    /// environment.
    pub fn from_env() -> Result<Self, crate::error::ModelError> {
        let client = GeminiClient::new(ModelConfig::from_env())?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Analyze one uploaded contract document.
    ///
    /// Never panics and never returns a partial result: every failure is
    /// folded into [`AnalysisOutcome::Failure`] with a user-facing message.
    pub async fn analyze(&self, file: Option<&UploadedFile>) -> AnalysisOutcome {
        let request_id = Uuid::new_v4();
        let started = Instant::now();

        let result = self.run(file).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(report) => info!(
                %request_id,
                elapsed_ms,
                score = report.trustworthiness_score,
                band = report.score_band().as_str(),
                terms = report.contract_terms.len(),
                issues = report.potential_issues.len(),
                "contract analysis complete"
            ),
            Err(error) => warn!(
                %request_id,
                elapsed_ms,
                error = %error,
                "contract analysis failed"
            ),
        }

        AnalysisOutcome::from(result)
    }

    async fn run(&self, file: Option<&UploadedFile>) -> Result<AnalysisReport, AnalysisError> {
        let file = validation::validate(file)?;

        let (bytes, media_type) = media::prepare_for_upload(file);
        let document = InlineDocument {
            data: base64::engine::general_purpose::STANDARD.encode(bytes.as_ref()),
            media_type,
        };

        info!(
            size = file.size(),
            media_type = %document.media_type,
            file_name = file.file_name.as_deref().unwrap_or("<unnamed>"),
            "sending contract to model"
        );

        let reply = self
            .model
            .generate(CONTRACT_AUDIT_PROMPT, &document)
            .await?;

        let candidate = extract_json_candidate(&reply);
        let report: AnalysisReport =
            serde_json::from_str(&candidate).map_err(|e| AnalysisError::ParseFailure {
                reason: e.to_string(),
            })?;

        report
            .check_score()
            .map_err(|score| AnalysisError::ParseFailure {
                reason: format!("trustworthiness score {score} outside 0-100"),
            })?;

        Ok(report)
    }
}
