mod currency;
pub use currency::*;

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::Result;

/// Открывает файл базы и применяет миграции.
/// Если `fresh`, старый файл удаляется и база создается заново.
pub async fn connect(path: &Path, fresh: bool) -> Result<SqlitePool> {
    if fresh {
        match tokio::fs::remove_file(path).await {
            Ok(()) => tracing::info!("Удалила старую базу {}", path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    migrate(&pool).await?;
    tracing::info!("База {} готова к использованию", path.display());
    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!().run(pool).await?;
    Ok(())
}

/// База в памяти с одним соединением, чтобы все запросы видели одни данные
#[cfg(test)]
pub async fn memory() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    migrate(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[tokio::test]
    async fn fresh_connect_drops_previous_rows() -> Result<()> {
        let path = std::env::temp_dir().join(format!("cotacao-{}.db", uuid::Uuid::new_v4()));
        let pool = connect(&path, true).await?;
        sqlx::query("INSERT INTO exchange_rates(code) VALUES ('USD')")
            .execute(&pool)
            .await?;
        pool.close().await;

        let kept = connect(&path, false).await?;
        let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM exchange_rates")
            .fetch_one(&kept)
            .await?;
        assert_eq!(rows, 1);
        kept.close().await;

        let fresh = connect(&path, true).await?;
        let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM exchange_rates")
            .fetch_one(&fresh)
            .await?;
        assert_eq!(rows, 0);
        fresh.close().await;
        std::fs::remove_file(&path)?;
        Ok(())
    }
}
