//! Tool execution framework
//!
//! The model may call three backend functions. `catalog` defines their
//! argument shapes and declarations, `ToolCall::parse` turns a raw model call
//! into a typed value, and a `ToolExecutor` such as `AirlineToolDispatcher`
//! runs it and returns text for the conversation.

pub mod catalog;
pub mod declaration;
pub mod dispatcher;
pub mod executor;

// Re-export commonly used types
pub use catalog::{airline_tool_declarations, ToolCall, ToolCallError};
pub use declaration::create_tool_declaration;
pub use dispatcher::AirlineToolDispatcher;
pub use executor::ToolExecutor;
