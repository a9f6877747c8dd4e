use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ContactInputDoc {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

#[derive(ToSchema)]
pub struct ContactDoc {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::contacts::create,
        crate::routes::contacts::list,
        crate::routes::contacts::get,
        crate::routes::contacts::update,
        crate::routes::contacts::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ContactInputDoc,
            ContactDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "contacts")
    )
)]
pub struct ApiDoc;
