use crate::llm::core::error::LlmError;
use crate::llm::tools::ToolCallError;

/// Errors that can occur during agent execution
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// Error from the LLM provider
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// The model called a tool that cannot be run
    #[error(transparent)]
    Tool(#[from] ToolCallError),
}
