use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, Set};
use tracing::{info, instrument};

use models::contact;
use crate::contact::domain::ContactInput;
use crate::errors::ServiceError;

/// Insert a new contact and return it with its assigned id.
///
/// No duplicate check happens here; callers run [`super::has_duplicate`]
/// first. A unique-constraint violation still surfaces as
/// [`ServiceError::Duplicate`].
#[instrument(skip(db, input))]
pub async fn create_contact<C: ConnectionTrait>(db: &C, input: &ContactInput) -> Result<contact::Model, ServiceError> {
    let am = contact::ActiveModel {
        first_name: Set(input.first_name.clone()),
        last_name: Set(input.last_name.clone()),
        email: Set(input.email.clone()),
        phone_number: Set(input.phone_number.clone()),
        ..Default::default()
    };
    let created = am.insert(db).await?;
    info!(id = created.id, "contact_inserted");
    Ok(created)
}

/// Every contact in storage order.
pub async fn list_contacts<C: ConnectionTrait>(db: &C) -> Result<Vec<contact::Model>, ServiceError> {
    Ok(contact::Entity::find().all(db).await?)
}

/// Get contact by id.
pub async fn get_contact<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<contact::Model>, ServiceError> {
    Ok(contact::Entity::find_by_id(id).one(db).await?)
}

/// Delete a contact previously fetched with [`get_contact`].
#[instrument(skip(db, existing), fields(id = existing.id))]
pub async fn delete_contact<C: ConnectionTrait>(db: &C, existing: contact::Model) -> Result<(), ServiceError> {
    existing.delete(db).await?;
    info!("contact_removed");
    Ok(())
}

/// Overwrite the four mutable fields of `existing`; `id` is kept.
#[instrument(skip(db, existing, input), fields(id = existing.id))]
pub async fn update_contact<C: ConnectionTrait>(
    db: &C,
    existing: contact::Model,
    input: &ContactInput,
) -> Result<contact::Model, ServiceError> {
    let mut am: contact::ActiveModel = existing.into();
    am.first_name = Set(input.first_name.clone());
    am.last_name = Set(input.last_name.clone());
    am.email = Set(input.email.clone());
    am.phone_number = Set(input.phone_number.clone());
    let updated = am.update(db).await?;
    info!("contact_rewritten");
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, input};
    use sea_orm::TransactionTrait;

    #[tokio::test]
    async fn create_echoes_input_with_new_id() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let data = input("Alice", "A", "alice@x.com", "111");
        let created = create_contact(&db, &data).await?;

        assert_eq!(created.id, 1);
        assert_eq!(created.first_name, data.first_name);
        assert_eq!(created.last_name, data.last_name);
        assert_eq!(created.email, data.email);
        assert_eq!(created.phone_number, data.phone_number);

        let second = create_contact(&db, &input("Bob", "B", "bob@x.com", "222")).await?;
        assert_ne!(second.id, created.id);
        Ok(())
    }

    #[tokio::test]
    async fn list_returns_every_contact() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(list_contacts(&db).await?.is_empty());

        create_contact(&db, &input("Alice", "A", "alice@x.com", "111")).await?;
        create_contact(&db, &input("Bob", "B", "bob@x.com", "222")).await?;
        let all = list_contacts(&db).await?;
        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|c| c.first_name == "Bob"));
        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(get_contact(&db, 42).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_get_is_none() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let c = create_contact(&db, &input("Alice", "A", "alice@x.com", "111")).await?;
        let id = c.id;

        delete_contact(&db, c).await?;
        assert!(get_contact(&db, id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn update_rewrites_fields_and_keeps_id() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let c = create_contact(&db, &input("Alice", "A", "alice@x.com", "111")).await?;
        let id = c.id;

        let updated = update_contact(&db, c, &input("Alicia", "Z", "alice2@x.com", "333")).await?;
        assert_eq!(updated.id, id);
        assert_eq!(updated.first_name, "Alicia");
        assert_eq!(updated.last_name, "Z");
        assert_eq!(updated.email, "alice2@x.com");
        assert_eq!(updated.phone_number, "333");

        let stored = get_contact(&db, id).await?.unwrap();
        assert_eq!(stored, updated);
        Ok(())
    }

    #[tokio::test]
    async fn schema_violation_maps_to_duplicate() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_contact(&db, &input("Alice", "A", "alice@x.com", "111")).await?;

        let err = create_contact(&db, &input("Bob", "B", "alice@x.com", "222")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Duplicate(_)));
        assert_eq!(list_contacts(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn uncommitted_transaction_leaves_no_row() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        {
            let txn = db.begin().await?;
            create_contact(&txn, &input("Alice", "A", "alice@x.com", "111")).await?;
            txn.rollback().await?;
        }
        assert!(list_contacts(&db).await?.is_empty());

        let txn = db.begin().await?;
        create_contact(&txn, &input("Alice", "A", "alice@x.com", "111")).await?;
        txn.commit().await?;
        assert_eq!(list_contacts(&db).await?.len(), 1);
        Ok(())
    }
}
