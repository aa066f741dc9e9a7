use clap::Parser;
use health_server::{telemetry, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = ServerConfig::parse();
    telemetry::init_tracing(&config.log_level)?;

    health_server::serve(config).await
}
