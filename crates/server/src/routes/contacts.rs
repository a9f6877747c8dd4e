use axum::Json;
use tracing::{info, warn};

use common::types::Message;
use service::contact::{self as contacts, Contact, ContactInput};

use crate::{
    errors::JsonApiError,
    extract::{ApiJson, ApiPath},
    session::DbSession,
};

#[utoipa::path(
    post, path = "/api/contacts", tag = "contacts",
    request_body = crate::openapi::ContactInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ContactDoc),
        (status = 401, description = "Email or phone number already used", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(session: DbSession, ApiJson(input): ApiJson<ContactInput>) -> Result<Json<Contact>, JsonApiError> {
    if contacts::has_duplicate(session.conn(), &input.email, &input.phone_number).await? {
        warn!("contact_create_duplicate_rejected");
        return Err(JsonApiError::contact_exists());
    }
    let created = contacts::create_contact(session.conn(), &input).await?;
    session.commit().await?;
    info!(id = created.id, "contact_created");
    Ok(Json(created.into()))
}

#[utoipa::path(
    get, path = "/api/contacts", tag = "contacts",
    responses((status = 200, description = "List OK", body = [crate::openapi::ContactDoc]))
)]
pub async fn list(session: DbSession) -> Result<Json<Vec<Contact>>, JsonApiError> {
    let rows = contacts::list_contacts(session.conn()).await?;
    session.commit().await?;
    info!(count = rows.len(), "list contacts");
    Ok(Json(rows.into_iter().map(Contact::from).collect()))
}

#[utoipa::path(
    get, path = "/api/contacts/{id}", tag = "contacts",
    params(("id" = i32, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ContactDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(ApiPath(id): ApiPath<i32>, session: DbSession) -> Result<Json<Contact>, JsonApiError> {
    let found = contacts::get_contact(session.conn(), id)
        .await?
        .ok_or_else(JsonApiError::contact_not_found)?;
    session.commit().await?;
    Ok(Json(found.into()))
}

#[utoipa::path(
    delete, path = "/api/contacts/{id}", tag = "contacts",
    params(("id" = i32, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(ApiPath(id): ApiPath<i32>, session: DbSession) -> Result<Json<Message>, JsonApiError> {
    let existing = contacts::get_contact(session.conn(), id)
        .await?
        .ok_or_else(JsonApiError::contact_not_found)?;
    contacts::delete_contact(session.conn(), existing).await?;
    session.commit().await?;
    info!(id, "contact_deleted");
    Ok(Json(Message::new("Contact has been deleted")))
}

#[utoipa::path(
    put, path = "/api/contacts/{id}", tag = "contacts",
    params(("id" = i32, Path, description = "Contact ID")),
    request_body = crate::openapi::ContactInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ContactDoc),
        (status = 401, description = "Email or phone number already used", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    ApiPath(id): ApiPath<i32>,
    session: DbSession,
    ApiJson(input): ApiJson<ContactInput>,
) -> Result<Json<Contact>, JsonApiError> {
    let existing = contacts::get_contact(session.conn(), id)
        .await?
        .ok_or_else(JsonApiError::contact_not_found)?;
    // 允许当前联系人保留自己的邮箱与电话
    if contacts::has_duplicate_excluding(session.conn(), &input.email, &input.phone_number, existing.id).await? {
        warn!(id, "contact_update_duplicate_rejected");
        return Err(JsonApiError::contact_exists());
    }
    let updated = contacts::update_contact(session.conn(), existing, &input).await?;
    session.commit().await?;
    info!(id, "contact_updated");
    Ok(Json(updated.into()))
}
