use std::time::Duration;

use crate::models::{ExchangeRate, StoredRate};
use crate::{AppError, Result};

#[derive(Clone)]
pub struct CurrencyStorage {
    pool: sqlx::SqlitePool,
    insert_timeout: Duration,
}
impl CurrencyStorage {
    pub fn new(pool: sqlx::SqlitePool, insert_timeout: Duration) -> Self {
        Self {
            pool,
            insert_timeout,
        }
    }
    /// Сохраняет курс, возвращает id новой строки
    pub async fn save(&self, rate: &ExchangeRate) -> Result<i64> {
        let query = "INSERT INTO exchange_rates(code, code_in, high, low, bid, ask, timestamp) \
            VALUES (?, ?, ?, ?, ?, ?, ?)";
        let insert = sqlx::query(query)
            .bind(&rate.code)
            .bind(&rate.code_in)
            .bind(&rate.high)
            .bind(&rate.low)
            .bind(&rate.bid)
            .bind(&rate.ask)
            .bind(&rate.timestamp)
            .execute(&self.pool);
        let result = tokio::time::timeout(self.insert_timeout, insert)
            .await
            .map_err(|_| AppError::Timeout {
                stage: "insert",
                budget: self.insert_timeout,
            })??;
        Ok(result.last_insert_rowid())
    }
    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM exchange_rates")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
    pub async fn latest(&self) -> Result<Option<StoredRate>> {
        let query = "SELECT * FROM exchange_rates ORDER BY id DESC LIMIT 1";
        let result = sqlx::query_as::<_, StoredRate>(query)
            .fetch_optional(&self.pool)
            .await?;
        Ok(result)
    }
}
