#![cfg(test)]
use sea_orm::DatabaseConnection;
use models::db::{connect_with_config, init_schema, DatabaseConfig};

use crate::contact::ContactInput;

/// Private in-memory database with the schema applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&DatabaseConfig::sqlite_in_memory()).await?;
    init_schema(&db).await?;
    Ok(db)
}

pub fn input(first_name: &str, last_name: &str, email: &str, phone_number: &str) -> ContactInput {
    ContactInput {
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: email.into(),
        phone_number: phone_number.into(),
    }
}
