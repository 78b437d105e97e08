//! Mapping between abstraction types and OpenAI-specific types

use crate::llm::core::types::{
    GenerateRequest, GenerateResponse, Message, OutputItem, ToolDeclaration, UsageMetadata,
};

use super::types::{
    CreateResponseRequest, InputMessage, OpenAiTool, ResponseContent, ResponseObject,
    ResponseOutputItem,
};

/// Convert our abstraction request to the Responses API request format
pub fn to_openai_request(model: &str, request: GenerateRequest) -> CreateResponseRequest {
    CreateResponseRequest {
        model: model.to_string(),
        input: request.messages.into_iter().map(to_input_message).collect(),
        instructions: request.system,
        tools: request.tools.into_iter().map(to_openai_tool).collect(),
        tool_choice: Some(request.config.tool_choice.as_str().to_string()),
        max_output_tokens: request.config.max_output_tokens,
        temperature: request.config.temperature,
        top_p: request.config.top_p,
    }
}

fn to_input_message(message: Message) -> InputMessage {
    InputMessage {
        role: message.role.as_str().to_string(),
        content: message.content,
    }
}

fn to_openai_tool(tool: ToolDeclaration) -> OpenAiTool {
    match tool {
        ToolDeclaration::Function(function) => OpenAiTool::Function {
            name: function.name,
            description: function.description,
            parameters: function.parameters,
            strict: function.strict,
        },
        ToolDeclaration::WebSearch => OpenAiTool::WebSearchPreview,
        ToolDeclaration::FileSearch { vector_store_ids } => {
            OpenAiTool::FileSearch { vector_store_ids }
        }
    }
}

/// Convert a Responses API response object into our abstraction
///
/// Message items keep their text; refusals are surfaced as text so the
/// caller always has something to show. Unmodelled item types are dropped.
pub fn from_openai_response(response: ResponseObject) -> GenerateResponse {
    let output = response
        .output
        .into_iter()
        .filter_map(|item| match item {
            ResponseOutputItem::Message { content } => {
                let text = content
                    .into_iter()
                    .filter_map(|part| match part {
                        ResponseContent::OutputText { text } => Some(text),
                        ResponseContent::Refusal { refusal } => Some(refusal),
                        ResponseContent::Unsupported => None,
                    })
                    .collect::<String>();
                Some(OutputItem::Message { text })
            }
            ResponseOutputItem::FunctionCall {
                call_id,
                name,
                arguments,
            } => Some(OutputItem::FunctionCall {
                call_id,
                name,
                arguments,
            }),
            ResponseOutputItem::WebSearchCall { .. } => Some(OutputItem::HostedToolCall {
                kind: "web_search_call".to_string(),
            }),
            ResponseOutputItem::FileSearchCall { .. } => Some(OutputItem::HostedToolCall {
                kind: "file_search_call".to_string(),
            }),
            ResponseOutputItem::Unsupported => None,
        })
        .collect();

    let usage = response.usage.map(|usage| {
        let mut metadata = UsageMetadata::new(usage.input_tokens, usage.output_tokens);
        if let Some(total) = usage.total_tokens {
            metadata.total_tokens = total;
        }
        metadata
    });

    GenerateResponse {
        id: response.id,
        output,
        usage,
    }
}
