//! Request-scoped database session.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::error;

use crate::{errors::JsonApiError, state::ServerState};

/// A transaction opened when the request is extracted.
///
/// Handlers call [`DbSession::commit`] once their work succeeded. On any other
/// path the session is dropped, which rolls the transaction back and hands the
/// connection back to the pool.
pub struct DbSession {
    txn: DatabaseTransaction,
}

impl DbSession {
    pub fn conn(&self) -> &DatabaseTransaction {
        &self.txn
    }

    pub async fn commit(self) -> Result<(), JsonApiError> {
        self.txn.commit().await.map_err(|e| {
            error!(err = %e, "session commit failed");
            JsonApiError::internal(e.to_string())
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for DbSession
where
    ServerState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = ServerState::from_ref(state);
        let txn = state.db.begin().await.map_err(|e| {
            error!(err = %e, "cannot open database session");
            JsonApiError::internal(e.to_string())
        })?;
        Ok(Self { txn })
    }
}
