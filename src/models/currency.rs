use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Ответ upstream API: курс, вложенный под ключом валютной пары
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwesomeApiResponse {
    #[serde(rename = "USDBRL")]
    pub usdbrl: ExchangeRate,
}

/// Курс USD-BRL в том виде, в котором его отдает upstream
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExchangeRate {
    pub code: String,
    #[serde(rename = "codein")]
    pub code_in: String,
    pub high: String,
    pub low: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
}
impl ExchangeRate {
    /// `timestamp` upstream передает как unix-секунды строкой
    pub fn quoted_at(&self) -> Option<DateTime<Utc>> {
        let secs = self.timestamp.parse::<i64>().ok()?;
        DateTime::from_timestamp(secs, 0)
    }
}

/// Строка таблицы exchange_rates
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct StoredRate {
    pub id: i64,
    pub code: String,
    pub code_in: String,
    pub high: String,
    pub low: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
}
impl From<StoredRate> for ExchangeRate {
    fn from(value: StoredRate) -> Self {
        Self {
            code: value.code,
            code_in: value.code_in,
            high: value.high,
            low: value.low,
            bid: value.bid,
            ask: value.ask,
            timestamp: value.timestamp,
        }
    }
}

/// Ответ на GET /cotacao. В поле `bid` лежит значение ask.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub bid: String,
}
impl From<&ExchangeRate> for Quote {
    fn from(value: &ExchangeRate) -> Self {
        Self {
            bid: value.ask.clone(),
        }
    }
}
