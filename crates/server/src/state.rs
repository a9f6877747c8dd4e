use sea_orm::DatabaseConnection;

/// Shared application state. The connection is a pool handle and cheap to clone.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
