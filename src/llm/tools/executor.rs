//! Tool executor trait

use async_trait::async_trait;

use super::catalog::ToolCall;

/// Trait for executing tool calls from the LLM
///
/// Implementations run the backend function a `ToolCall` names and return
/// its result already serialized to text, ready to be written back into the
/// conversation. Tool failures are reported inside that text; executing a
/// tool never fails the turn.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool call
    ///
    /// # Arguments
    ///
    /// * `call` - The parsed tool call
    ///
    /// # Returns
    ///
    /// The tool result as text (JSON for structured results)
    async fn execute(&self, call: ToolCall) -> String;
}
