//! LLM Abstraction Layer
//!
//! A provider-neutral request/response model with an OpenAI Responses API
//! implementation, the airline tool set, and the turn-handling agent.

pub mod agent;
pub mod core;
pub mod openai;
pub mod tools;

// Re-export commonly used types
pub use agent::{Agent, AgentError, TurnOutcome, SYSTEM_PROMPT};
pub use core::{
    config::{GenerationConfig, ToolChoice},
    error::LlmError,
    provider::LlmProvider,
    types::{
        GenerateRequest, GenerateResponse, Message, MessageRole, OutputItem, ToolDeclaration,
        UsageMetadata,
    },
};
pub use openai::{OpenAiClient, OpenAiModel};
pub use tools::{AirlineToolDispatcher, ToolCall, ToolExecutor};
