//! OpenAI provider implementation
//!
//! This module provides a client for the OpenAI Responses API, including the
//! provider-native web search and file search tool types.

pub mod client;
pub mod mapper;
pub mod types;

// Re-export commonly used types
pub use client::{OpenAiClient, OpenAiModel, DEFAULT_BASE_URL};
