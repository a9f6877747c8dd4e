use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, Set};
use anyhow::Result;

use super::setup_test_db;
use crate::contact;

fn alice() -> contact::ActiveModel {
    contact::ActiveModel {
        first_name: Set("Alice".to_string()),
        last_name: Set("A".to_string()),
        email: Set("alice@x.com".to_string()),
        phone_number: Set("111".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn contact_insert_find_update_delete() -> Result<()> {
    let db = setup_test_db().await?;

    let created = alice().insert(&db).await?;
    assert_eq!(created.id, 1);
    assert_eq!(created.email, "alice@x.com");

    let by_email = contact::Entity::find()
        .filter(contact::Column::Email.eq("alice@x.com"))
        .one(&db)
        .await?;
    assert_eq!(by_email.as_ref().map(|c| c.id), Some(created.id));

    let mut am: contact::ActiveModel = created.clone().into();
    am.last_name = Set("Anderson".to_string());
    let updated = am.update(&db).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.last_name, "Anderson");

    updated.delete(&db).await?;
    assert!(contact::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn ids_are_assigned_in_sequence() -> Result<()> {
    let db = setup_test_db().await?;
    let first = alice().insert(&db).await?;
    let second = contact::ActiveModel {
        first_name: Set("Bob".to_string()),
        last_name: Set("B".to_string()),
        email: Set("bob@x.com".to_string()),
        phone_number: Set("222".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    assert!(second.id > first.id);
    assert_eq!(contact::Entity::find().all(&db).await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn unique_columns_are_enforced_by_schema() -> Result<()> {
    let db = setup_test_db().await?;
    alice().insert(&db).await?;

    let same_email = contact::ActiveModel {
        phone_number: Set("999".to_string()),
        ..alice()
    };
    let err = same_email.insert(&db).await.expect_err("email must be unique");
    assert!(matches!(err.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_))));

    let same_phone = contact::ActiveModel {
        email: Set("other@x.com".to_string()),
        ..alice()
    };
    assert!(same_phone.insert(&db).await.is_err());
    assert_eq!(contact::Entity::find().all(&db).await?.len(), 1);
    Ok(())
}

#[test]
fn model_serializes_with_api_field_names() {
    let m = contact::Model {
        id: 3,
        first_name: "Alice".into(),
        last_name: "A".into(),
        email: "alice@x.com".into(),
        phone_number: "111".into(),
    };
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["phone_number"], "111");
    assert_eq!(v["id"], 3);
}
