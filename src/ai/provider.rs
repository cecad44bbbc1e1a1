//! External model seam
//!
//! The orchestrator talks to the generative model exclusively through
//! [`GenerativeModel`], an injected collaborator. Production code plugs in
//! [`crate::ai::GeminiClient`]; tests plug in a deterministic stub.

use async_trait::async_trait;

use crate::error::ModelError;

/// A base64-encoded document attached to a model request alongside the
/// prompt text.
#[derive(Debug, Clone)]
pub struct InlineDocument {
    /// Base64 payload (standard alphabet).
    pub data: String,

    /// Media type describing the decoded bytes.
    pub media_type: String,
}

/// The single capability the pipeline needs from the external model:
/// generate free text from a prompt plus one inline binary part.
///
/// One blocking request/response per call. No streaming, no multi-turn
/// state. Implementations raise tagged [`ModelError`] variants at this
/// boundary so callers never classify failures by message content.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        document: &InlineDocument,
    ) -> Result<String, ModelError>;
}
