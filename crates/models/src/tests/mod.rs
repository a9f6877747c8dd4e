
/// CRUD operations on the contact entity
pub mod crud_tests;

use sea_orm::DatabaseConnection;

use crate::db::{connect_with_config, init_schema, DatabaseConfig};

/// Fresh in-memory database with the schema applied.
async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::sqlite_in_memory()).await?;
    init_schema(&db).await?;
    Ok(db)
}
