//! Create `contact` table.
//!
//! Email and phone number carry unique constraints so that two writers racing
//! past the duplicate check cannot both persist.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(contact_table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contact::Table).to_owned()).await
    }
}

/// Text columns are unbounded so any string the API accepts can be stored.
fn contact_table() -> TableCreateStatement {
    Table::create()
        .table(Contact::Table)
        .if_not_exists()
        .col(pk_auto(Contact::Id))
        .col(string(Contact::FirstName))
        .col(string(Contact::LastName))
        .col(string(Contact::Email).unique_key())
        .col(string(Contact::PhoneNumber).unique_key())
        .to_owned()
}

#[derive(DeriveIden)]
enum Contact {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgres_columns_have_no_length_limit() {
        let sql = contact_table().to_string(PostgresQueryBuilder);
        assert!(sql.contains("\"first_name\" varchar"), "{sql}");
        assert!(sql.contains("\"phone_number\" varchar"), "{sql}");
        assert!(!sql.contains("varchar("), "{sql}");
    }
}
