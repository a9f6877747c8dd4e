use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Select};
use tracing::{debug, instrument};

use models::contact;
use crate::errors::ServiceError;

/// True when another contact already uses `email` or `phone_number`.
///
/// Two independent exact-string lookups; either match is a duplicate.
#[instrument(skip(db, email, phone_number))]
pub async fn has_duplicate<C: ConnectionTrait>(db: &C, email: &str, phone_number: &str) -> Result<bool, ServiceError> {
    find_conflict(db, email, phone_number, None).await
}

/// Like [`has_duplicate`] but ignores the contact with id `exclude_id`, so a
/// contact may be saved again with its own email or phone number.
#[instrument(skip(db, email, phone_number))]
pub async fn has_duplicate_excluding<C: ConnectionTrait>(
    db: &C,
    email: &str,
    phone_number: &str,
    exclude_id: i32,
) -> Result<bool, ServiceError> {
    find_conflict(db, email, phone_number, Some(exclude_id)).await
}

async fn find_conflict<C: ConnectionTrait>(
    db: &C,
    email: &str,
    phone_number: &str,
    exclude_id: Option<i32>,
) -> Result<bool, ServiceError> {
    let by_email = excluding(contact::Entity::find().filter(contact::Column::Email.eq(email)), exclude_id)
        .one(db)
        .await?;
    let by_phone = excluding(contact::Entity::find().filter(contact::Column::PhoneNumber.eq(phone_number)), exclude_id)
        .one(db)
        .await?;

    let duplicate = by_email.is_some() || by_phone.is_some();
    if duplicate {
        debug!(
            email_taken = by_email.is_some(),
            phone_taken = by_phone.is_some(),
            "duplicate contact detected"
        );
    }
    Ok(duplicate)
}

fn excluding(select: Select<contact::Entity>, exclude_id: Option<i32>) -> Select<contact::Entity> {
    match exclude_id {
        Some(id) => select.filter(contact::Column::Id.ne(id)),
        None => select,
    }
}
