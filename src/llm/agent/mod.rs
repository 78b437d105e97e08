//! Turn handler for the airline assistant
//!
//! One call to [`Agent::run`] handles one user turn:
//! - appends the user message to the caller's history
//! - calls the LLM with the full history, instructions and tool set
//! - if the first output item is a function call, runs that one tool,
//!   records its result and calls the LLM a second time
//! - appends the final reply and hands the history back
//!
//! The agent holds no conversation state of its own; history is owned by
//! the caller and passed in by value on every turn.

mod error;
mod prompt;

pub use error::AgentError;
pub use prompt::SYSTEM_PROMPT;

use std::sync::Arc;

use crate::llm::core::{
    config::GenerationConfig,
    provider::LlmProvider,
    types::{GenerateRequest, GenerateResponse, Message, ToolDeclaration},
};
use crate::llm::tools::{catalog::ToolCall, executor::ToolExecutor};

/// Result of a completed turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Final assistant text
    pub reply: String,
    /// History including this turn's messages
    pub history: Vec<Message>,
}

/// Stateless agent shared across requests
pub struct Agent {
    /// LLM provider
    provider: Arc<dyn LlmProvider>,

    /// Tool executor for handling function calls
    tool_executor: Arc<dyn ToolExecutor>,

    /// Tool declarations available to the LLM
    tool_declarations: Vec<ToolDeclaration>,

    /// Generation configuration
    config: GenerationConfig,

    /// System prompt (optional)
    system: Option<String>,
}

impl Agent {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        tool_executor: Arc<dyn ToolExecutor>,
        tool_declarations: Vec<ToolDeclaration>,
        config: GenerationConfig,
        system: Option<String>,
    ) -> Self {
        Self {
            provider,
            tool_executor,
            tool_declarations,
            config,
            system,
        }
    }

    /// Process one user message against the caller's history
    ///
    /// On success the returned history is the input history plus the user
    /// message, the tool result note when a tool ran, and the final reply.
    /// Nothing is returned on failure; the caller keeps its original history.
    #[tracing::instrument(skip_all, fields(history_len = history.len()))]
    pub async fn run(
        &self,
        user_message: impl Into<String> + Send,
        mut history: Vec<Message>,
    ) -> Result<TurnOutcome, AgentError> {
        history.push(Message::user(user_message));

        let first = self.generate(&history).await?;

        let reply = match first.leading_function_call() {
            Some(call) => {
                let extra_calls = first.function_call_count().saturating_sub(1);
                if extra_calls > 0 {
                    tracing::warn!(
                        ignored = extra_calls,
                        "model requested more than one tool call, only the first is run"
                    );
                }

                let tool_call = ToolCall::parse(call.name, call.arguments).map_err(|e| {
                    tracing::warn!(tool = call.name, error = %e, "rejected tool call");
                    e
                })?;

                tracing::info!(tool = tool_call.name(), call_id = call.call_id, "executing tool");
                let result = self.tool_executor.execute(tool_call).await;

                history.push(Message::assistant(format!(
                    "Tool {} executed: {}",
                    call.name, result
                )));

                self.generate(&history).await?.output_text()
            }
            None => first.output_text(),
        };

        history.push(Message::assistant(reply.clone()));
        tracing::info!(history_len = history.len(), "turn completed");

        Ok(TurnOutcome { reply, history })
    }

    async fn generate(&self, history: &[Message]) -> Result<GenerateResponse, AgentError> {
        let request = GenerateRequest {
            messages: history.to_vec(),
            tools: self.tool_declarations.clone(),
            config: self.config.clone(),
            system: self.system.clone(),
        };

        let response = self.provider.generate(request).await?;
        tracing::debug!(response_id = %response.id, items = response.output.len(), "model responded");
        Ok(response)
    }
}
