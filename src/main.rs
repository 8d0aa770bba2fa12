use anyhow::Context;
use clap::Parser;
use cotacao::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cfg = ServerConfig::parse();
    tracing_subscriber::fmt()
        .with_max_level(cfg.log_level)
        .init();
    cotacao::run(cfg).await.context("server stopped")
}
