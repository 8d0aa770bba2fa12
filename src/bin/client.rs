use anyhow::Context;
use clap::Parser;
use cotacao::client::{write_quote, RateClient};
use cotacao::config::ClientConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cfg = ClientConfig::parse();
    tracing_subscriber::fmt()
        .with_max_level(cfg.log_level)
        .init();
    let client = RateClient::new(cfg.server_url.clone(), cfg.timeout())?;
    let quote = client
        .get_quote()
        .await
        .context("unable to get the dollar rate")?;
    write_quote(&cfg.output, &quote)
        .await
        .with_context(|| format!("unable to write {}", cfg.output.display()))?;
    Ok(())
}
