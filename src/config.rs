use std::{net::SocketAddr, path::PathBuf, time::Duration};

use clap::Parser;

use crate::currency_service::AWESOME_API_URI;

/// Настройки сервера котировок. Каждое поле можно задать переменной окружения.
#[derive(Parser, Debug, Clone)]
#[command(name = "cotacao-server", about = "Serves the current USD-BRL rate")]
pub struct ServerConfig {
    #[arg(long, env = "COTACAO_LISTEN", default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,
    #[arg(long, env = "COTACAO_DATABASE", default_value = "sqlite.db")]
    pub database: PathBuf,
    /// Не удалять базу при старте
    #[arg(long, env = "COTACAO_KEEP_HISTORY")]
    pub keep_history: bool,
    #[arg(long, env = "COTACAO_UPSTREAM_URL", default_value = AWESOME_API_URI)]
    pub upstream_url: String,
    #[arg(long, env = "COTACAO_UPSTREAM_TIMEOUT_MS", default_value_t = 200)]
    pub upstream_timeout_ms: u64,
    #[arg(long, env = "COTACAO_PERSIST_TIMEOUT_MS", default_value_t = 10)]
    pub persist_timeout_ms: u64,
    #[arg(long, env = "COTACAO_REQUEST_TIMEOUT_MS", default_value_t = 1000)]
    pub request_timeout_ms: u64,
    #[arg(long, env = "COTACAO_LOG_LEVEL", default_value = "info")]
    pub log_level: tracing::Level,
}
impl ServerConfig {
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }
    pub fn persist_timeout(&self) -> Duration {
        Duration::from_millis(self.persist_timeout_ms)
    }
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Настройки клиента
#[derive(Parser, Debug, Clone)]
#[command(name = "cotacao-client", about = "Writes the current dollar rate to a file")]
pub struct ClientConfig {
    #[arg(
        long,
        env = "COTACAO_SERVER_URL",
        default_value = "http://localhost:8080/cotacao"
    )]
    pub server_url: String,
    #[arg(long, env = "COTACAO_TIMEOUT_MS", default_value_t = 300)]
    pub timeout_ms: u64,
    #[arg(long, env = "COTACAO_OUTPUT", default_value = "cotacao.txt")]
    pub output: PathBuf,
    #[arg(long, env = "COTACAO_LOG_LEVEL", default_value = "info")]
    pub log_level: tracing::Level,
}
impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn server_defaults() -> Result<()> {
        let cfg = ServerConfig::try_parse_from(["cotacao-server"])?;
        assert_eq!(cfg.listen.port(), 8080);
        assert_eq!(cfg.database, PathBuf::from("sqlite.db"));
        assert!(!cfg.keep_history);
        assert_eq!(cfg.upstream_url, AWESOME_API_URI);
        assert_eq!(cfg.upstream_timeout(), Duration::from_millis(200));
        assert_eq!(cfg.persist_timeout(), Duration::from_millis(10));
        Ok(())
    }
    #[test]
    fn client_overrides() -> Result<()> {
        let cfg = ClientConfig::try_parse_from([
            "cotacao-client",
            "--timeout-ms",
            "500",
            "--output",
            "/tmp/out.txt",
            "--log-level",
            "debug",
        ])?;
        assert_eq!(cfg.server_url, "http://localhost:8080/cotacao");
        assert_eq!(cfg.timeout(), Duration::from_millis(500));
        assert_eq!(cfg.output, PathBuf::from("/tmp/out.txt"));
        assert_eq!(cfg.log_level, tracing::Level::DEBUG);
        Ok(())
    }
}
