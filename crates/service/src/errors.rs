use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("duplicate: {0}")]
    Duplicate(String),
    #[error("database error: {0}")]
    Db(String),
}

/// Unique-constraint violations become [`ServiceError::Duplicate`]; every
/// other storage failure is [`ServiceError::Db`].
impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::Duplicate(msg),
            _ => Self::Db(e.to_string()),
        }
    }
}
