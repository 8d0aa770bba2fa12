use std::{error::Error, fmt::Display, time::Duration};

#[derive(Debug)]
pub enum AppError {
    RequestError(String),
    Timeout { stage: &'static str, budget: Duration },
    DecodeError(String),
    DbError(String),
    IoError(String),
}

pub type Result<T> = core::result::Result<T, AppError>;
impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout { stage, budget } => write!(f, "{stage} timed out after {budget:?}"),
            _ => write!(f, "{self:?}"),
        }
    }
}
impl Error for AppError {}
impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        Self::RequestError(value.to_string())
    }
}
impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::DecodeError(value.to_string())
    }
}
impl From<sqlx::Error> for AppError {
    fn from(value: sqlx::Error) -> Self {
        Self::DbError(value.to_string())
    }
}
impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(value: sqlx::migrate::MigrateError) -> Self {
        Self::DbError(value.to_string())
    }
}
impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::IoError(value.to_string())
    }
}
