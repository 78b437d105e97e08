//! OpenAI Responses API request and response types
//!
//! These types map directly to the `/v1/responses` wire schema.

use serde::{Deserialize, Serialize};

/// Request body for `POST /responses`
#[derive(Debug, Clone, Serialize)]
pub struct CreateResponseRequest {
    /// Model identifier
    pub model: String,
    /// Conversation input
    pub input: Vec<InputMessage>,
    /// System-level instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Tools the model may use
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<OpenAiTool>,
    /// "auto", "none" or "required"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

/// A role-tagged input message with plain text content
#[derive(Debug, Clone, Serialize)]
pub struct InputMessage {
    pub role: String,
    pub content: String,
}

/// Tool definition in the Responses API
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OpenAiTool {
    /// Function executed by the caller
    Function {
        name: String,
        description: String,
        parameters: serde_json::Value,
        strict: bool,
    },
    /// Hosted web search
    WebSearchPreview,
    /// Hosted vector store search
    FileSearch { vector_store_ids: Vec<String> },
}

/// Response object returned by `POST /responses`
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseObject {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub output: Vec<ResponseOutputItem>,
    #[serde(default)]
    pub usage: Option<ResponseUsage>,
    #[serde(default)]
    pub error: Option<ApiErrorData>,
}

/// One output item of a response
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseOutputItem {
    /// Assistant message with one or more content parts
    Message {
        #[serde(default)]
        content: Vec<ResponseContent>,
    },
    /// The model asks the caller to run a function
    FunctionCall {
        call_id: String,
        name: String,
        arguments: String,
    },
    /// Hosted web search already performed
    WebSearchCall {
        #[serde(default)]
        status: Option<String>,
    },
    /// Hosted file search already performed
    FileSearchCall {
        #[serde(default)]
        status: Option<String>,
    },
    /// Item types this client does not model (reasoning, etc.)
    #[serde(other)]
    Unsupported,
}

/// A content part inside a message output item
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseContent {
    OutputText { text: String },
    Refusal { refusal: String },
    #[serde(other)]
    Unsupported,
}

/// Token usage
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    #[serde(default)]
    pub total_tokens: Option<u32>,
}

/// Envelope used by the API for error bodies
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorData,
}

/// Error details
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorData {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}
