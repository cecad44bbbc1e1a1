//! Contract Analysis Pipeline
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  1. VALIDATE: presence, 10 MiB limit, image/* or PDF           │
//! │  2. PREPARE:  resolve media type, downscale oversized images   │
//! │  3. ENCODE:   base64 inline document                           │
//! │  4. INVOKE:   fixed auditor prompt + inline part → Gemini      │
//! │  5. EXTRACT:  fenced block → balanced braces → raw text        │
//! │  6. PARSE:    serde into AnalysisReport, score range enforced  │
//! │  7. CLASSIFY: failures → user-facing AnalysisOutcome           │
//! └────────────────────────────────────────────────────────────────┘
//! ```

mod analyzer;
mod extract;
mod gemini;
mod outcome;
mod prompts;
mod provider;
mod report;


pub use analyzer::ContractAnalyzer;
pub use gemini::GeminiClient;
pub use outcome::AnalysisOutcome;
pub use prompts::CONTRACT_AUDIT_PROMPT;
pub use provider::{GenerativeModel, InlineDocument};
pub use report::{
    AnalysisReport, ContractTerm, IssueSeverity, PotentialIssue, ScoreBand, TermFlag,
};
