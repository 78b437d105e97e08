// HTTP Server modules
pub mod handlers;
pub mod models;
pub mod routes;

// Startup configuration
pub mod config;

// Flight schedule and booking store
pub mod airline_db;

// LLM abstraction layer
pub mod llm;

// Weather lookups
pub mod weather;
