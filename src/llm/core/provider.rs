//! Provider trait for LLM implementations

use async_trait::async_trait;

use super::{
    error::LlmError,
    types::{GenerateRequest, GenerateResponse},
};

/// Main interface that all LLM provider implementations must satisfy
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate one complete model response
    ///
    /// # Arguments
    /// * `request` - The generation request with history, tools, and config
    ///
    /// # Returns
    /// The ordered output items the model produced, or an error if the call fails
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError>;
}
