// Route definitions

use crate::handlers;
use crate::llm::Agent;
use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;

/// Largest accepted request body
pub const MAX_BODY_BYTES: u64 = 1024 * 1024;

pub fn configure_routes(
    agent: Arc<Agent>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // POST /chat
    warp::path("chat")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(with_agent(agent))
        .and_then(handlers::chat_handler)
}

fn with_agent(agent: Arc<Agent>) -> impl Filter<Extract = (Arc<Agent>,), Error = Infallible> + Clone {
    warp::any().map(move || agent.clone())
}
