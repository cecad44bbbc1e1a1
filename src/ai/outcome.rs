//! Caller-facing outcome
//!
//! The one value that crosses the system boundary: either a full report or
//! a human-readable failure message. Nothing partial, ever.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::AnalysisError;

use super::report::AnalysisReport;

/// Result of one analysis request.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Success(AnalysisReport),
    Failure(String),
}

impl AnalysisOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The report, when the analysis succeeded.
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            Self::Success(report) => Some(report),
            Self::Failure(_) => None,
        }
    }

    /// The user-facing message, when the analysis failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }
}

impl From<Result<AnalysisReport, AnalysisError>> for AnalysisOutcome {
    fn from(result: Result<AnalysisReport, AnalysisError>) -> Self {
        match result {
            Ok(report) => Self::Success(report),
            Err(error) => Self::Failure(error.user_message()),
        }
    }
}

// Fixed wire envelope: {"success": true, "data": ...} on success,
// {"success": false, "error": ...} on failure.
impl Serialize for AnalysisOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Success(report) => {
                let mut state = serializer.serialize_struct("AnalysisOutcome", 2)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("data", report)?;
                state.end()
            }
            Self::Failure(message) => {
                let mut state = serializer.serialize_struct("AnalysisOutcome", 2)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", message)?;
                state.end()
            }
        }
    }
}
