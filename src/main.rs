mod error;
mod config;
mod ai {
    pub mod client;
    pub mod extract;
    pub mod prompts;
    pub mod schema_utils;
}
mod studio {
    pub mod preset;
    pub mod service;
    pub mod template;
}
mod api {
    pub mod analyze;
    pub mod assemble;
    pub mod variants;
}
mod http;

use std::sync::Arc;

use dotenv::dotenv;
use tokio::net::TcpListener;

use crate::ai::client::GeminiClient;
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::builder().filter_level(log::LevelFilter::Info).init();

    // Fail fast: without a credential there is nothing this process can
    // serve, so bail before binding the socket.
    let config = Config::from_env()?;
    let client = GeminiClient::new(&config)?;
    let state = Arc::new(http::AppState { client, max_body_bytes: config.max_body_bytes });

    let listener = TcpListener::bind(&config.bind_addr).await?;
    log::info!("promptstudio listening on {} (model: {})", config.bind_addr, config.model);

    http::serve(listener, state).await?;
    Ok(())
}
