// POST /chat handler

use crate::llm::Agent;
use crate::models::{ChatRequest, ChatResponse, ErrorResponse};
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;

pub async fn chat_handler(
    request: ChatRequest,
    agent: Arc<Agent>,
) -> Result<impl warp::Reply, Infallible> {
    tracing::info!(history_len = request.history.len(), "POST /chat");

    match agent.run(request.message, request.history).await {
        Ok(outcome) => {
            let response = ChatResponse {
                response: outcome.reply,
                history: outcome.history,
            };
            Ok(warp::reply::with_status(
                warp::reply::json(&response),
                StatusCode::OK,
            ))
        }
        Err(e) => {
            tracing::error!(error = %e, "chat turn failed");
            let error = ErrorResponse {
                detail: e.to_string(),
            };
            Ok(warp::reply::with_status(
                warp::reply::json(&error),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}
