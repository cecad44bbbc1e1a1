//! Error taxonomy for the analysis pipeline
//!
//! Failures are tagged where they happen: the validator raises
//! [`ValidationError`], the model client raises [`ModelError`], and the
//! orchestrator folds both into [`AnalysisError`]. User-facing messages are
//! produced in exactly one place, [`AnalysisError::user_message`], so no
//! layer above the client ever inspects error text.

use thiserror::Error;

/// Upload rejection, decided before any network call.
///
/// Display strings double as the user-facing messages for these cases.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("No file was provided for analysis")]
    MissingFile,

    #[error("File size exceeds the 10MB limit")]
    FileTooLarge,

    #[error("Only image and PDF files are supported")]
    UnsupportedType,
}

/// Failure raised by the external model client, tagged at the boundary
/// nearest the actual fault.
#[derive(Debug, Error)]
pub enum ModelError {
    /// No API key configured. Calls fail here rather than at startup.
    #[error("model API key is not configured")]
    MissingCredential,

    /// The provider rejected the request for quota/rate reasons.
    #[error("model request was rate limited")]
    Throttled,

    /// The configured model is deprecated or being replaced.
    #[error("model is deprecated or in transition")]
    ModelTransition,

    /// Any other non-success API response.
    #[error("model API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (DNS, TLS, connect, timeout).
    #[error("model request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider returned a well-formed reply with no usable text.
    #[error("model returned an empty response")]
    EmptyResponse,
}

/// Top-level error for one analysis request.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Model(#[from] ModelError),

    /// The model's reply could not be coerced into a valid report.
    #[error("failed to parse analysis response: {reason}")]
    ParseFailure { reason: String },
}

impl AnalysisError {
    /// Map a failure to the message shown to the user.
    ///
    /// Classification happens once, here, in priority order: model
    /// transition, throttling, parse failure, then verbatim passthrough of
    /// whatever the underlying error reports.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Model(ModelError::ModelTransition) => {
                "The analysis model is being updated. Please try again in a moment.".to_string()
            }
            AnalysisError::Model(ModelError::Throttled) => {
                "Too many requests right now. Please wait a moment and try again.".to_string()
            }
            AnalysisError::ParseFailure { .. } => {
                "Could not analyze the contract. Please try a clearer image or PDF.".to_string()
            }
            AnalysisError::Validation(e) => e.to_string(),
            AnalysisError::Model(other) => other.to_string(),
        }
    }
}
