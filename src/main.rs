use std::sync::Arc;

use airline_assistant::airline_db::AirlineDbClient;
use airline_assistant::config::{AppConfig, LogFormat};
use airline_assistant::llm::{
    tools::airline_tool_declarations, Agent, AirlineToolDispatcher, OpenAiClient, OpenAiModel,
    SYSTEM_PROMPT,
};
use airline_assistant::routes::configure_routes;
use airline_assistant::weather::OpenWeatherClient;
use tracing_subscriber::EnvFilter;

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Pretty => {
            tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt().with_env_filter(filter).json().init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the environment may already be populated
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_logging(config.log_format);
    tracing::debug!(?config, "configuration loaded");

    let db = AirlineDbClient::new(config.database.clone()).await?;
    db.ensure_schema().await?;
    tracing::info!(host = %config.database.host, database = %config.database.database, "connected to airline database");

    let provider = OpenAiClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        OpenAiModel::from_name(&config.openai_model),
    )?;
    let weather = OpenWeatherClient::new(
        config.weather_api_key.clone(),
        config.weather_base_url.clone(),
    )?;

    let dispatcher = AirlineToolDispatcher::new(Arc::new(db.clone()), Arc::new(weather));
    let agent = Arc::new(Agent::new(
        Arc::new(provider),
        Arc::new(dispatcher),
        airline_tool_declarations(&config.vector_store_id),
        config.generation.clone(),
        Some(SYSTEM_PROMPT.to_string()),
    ));

    let routes = configure_routes(agent);

    tracing::info!(address = %config.bind_address, model = %config.openai_model, "starting server");
    tokio::select! {
        _ = warp::serve(routes).run(config.bind_address) => {}
        result = tokio::signal::ctrl_c() => {
            result?;
            tracing::info!("shutdown signal received");
        }
    }

    db.close();
    tracing::info!("server stopped");
    Ok(())
}
