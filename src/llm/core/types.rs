//! Core types for the LLM abstraction layer

use serde::{Deserialize, Serialize};

use super::config::GenerationConfig;

/// Request to generate content from an LLM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Conversation history
    pub messages: Vec<Message>,
    /// Tools the model may call
    pub tools: Vec<ToolDeclaration>,
    /// Generation parameters
    pub config: GenerationConfig,
    /// System prompt/instructions
    pub system: Option<String>,
}

/// A single message in the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender
    pub role: MessageRole,
    /// Text of the message
    pub content: String,
}

impl Message {
    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Create a new assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Human input
    User,
    /// Model output, including tool result notes
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// Declaration of a tool available to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolDeclaration {
    /// A function executed by this backend
    Function(FunctionDeclaration),
    /// Provider-hosted web search
    WebSearch,
    /// Provider-hosted search over uploaded documents
    FileSearch { vector_store_ids: Vec<String> },
}

impl ToolDeclaration {
    /// Name of a function tool, `None` for provider-native tools
    pub fn function_name(&self) -> Option<&str> {
        match self {
            ToolDeclaration::Function(function) => Some(&function.name),
            _ => None,
        }
    }
}

/// Schema of a backend function the model can call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    /// Function name
    pub name: String,
    /// What the tool does and when to use it
    pub description: String,
    /// JSON Schema for parameters
    pub parameters: serde_json::Value,
    /// Ask the provider to enforce the schema exactly
    pub strict: bool,
}

/// One item of model output, in the order the provider returned it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputItem {
    /// Assistant text
    Message { text: String },
    /// Request to run a backend function
    FunctionCall {
        call_id: String,
        name: String,
        /// Raw JSON argument text as produced by the model
        arguments: String,
    },
    /// A provider-native tool already executed on the provider side
    HostedToolCall { kind: String },
}

/// A complete model response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Provider response ID
    pub id: String,
    /// Output items in order
    pub output: Vec<OutputItem>,
    /// Token usage, when reported
    pub usage: Option<UsageMetadata>,
}

/// A function call lifted out of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall<'a> {
    pub call_id: &'a str,
    pub name: &'a str,
    pub arguments: &'a str,
}

impl GenerateResponse {
    /// Concatenated text of all message items
    pub fn output_text(&self) -> String {
        self.output
            .iter()
            .filter_map(|item| match item {
                OutputItem::Message { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The function call in first output position, if any
    ///
    /// Function calls at later positions are not considered.
    pub fn leading_function_call(&self) -> Option<FunctionCall<'_>> {
        match self.output.first() {
            Some(OutputItem::FunctionCall {
                call_id,
                name,
                arguments,
            }) => Some(FunctionCall {
                call_id,
                name,
                arguments,
            }),
            _ => None,
        }
    }

    /// Number of function calls anywhere in the output
    pub fn function_call_count(&self) -> usize {
        self.output
            .iter()
            .filter(|item| matches!(item, OutputItem::FunctionCall { .. }))
            .count()
    }
}

/// Token usage information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageMetadata {
    /// Prompt tokens consumed
    pub input_tokens: u32,
    /// Response tokens generated
    pub output_tokens: u32,
    /// Sum of input and output
    pub total_tokens: u32,
}

impl UsageMetadata {
    /// Create new usage metadata
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
        }
    }
}
