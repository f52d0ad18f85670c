//! The boundary to whatever "runs" learner code.
//!
//! Nothing is executed locally. A gateway hands the source to an external
//! language model that plays interpreter and returns a plausible transcript.

mod llm;
pub mod prompt;

use async_trait::async_trait;
use learner_core::model::ExecutionResult;

pub use llm::{API_KEY_VAR, BASE_URL_VAR, LlmClient, LlmConfig, LlmGateway, MODEL_VAR};

pub const NOT_CONFIGURED_OUTPUT: &str =
    "Error: API Key not configured. Cannot execute code via AI backend.";
pub const RUNTIME_UNREACHABLE_OUTPUT: &str = "System Error: Failed to connect to AI runtime.";
pub const EXPLAIN_UNAVAILABLE: &str = "AI service unavailable.";
pub const EXPLAIN_FAILED: &str = "Error retrieving AI explanation.";
pub const EXPLAIN_EMPTY: &str = "I couldn't generate an explanation at this time.";

/// Runs and explains learner code.
///
/// Both operations are total: transport and configuration failures come back
/// as ordinary values (an error-flagged result, or an apology string).
#[async_trait]
pub trait ExecutionGateway: Send + Sync {
    /// Produce the interpreter transcript for `source`.
    async fn execute(&self, source: &str) -> ExecutionResult;

    /// Produce a free-text explanation of `topic` for the given code.
    async fn explain(&self, topic: &str, source: &str) -> String;
}
