use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CustomerRegistrationRequestDoc {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: i32,
    /// `MALE` or `FEMALE`
    pub gender: String,
}

/// Omitted fields are left unchanged.
#[derive(ToSchema)]
pub struct CustomerUpdateRequestDoc {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

#[derive(ToSchema)]
pub struct CustomerViewDoc {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub gender: String,
}

#[derive(ToSchema)]
pub struct ErrorResponseDoc {
    pub error: String,
    pub detail: Option<String>,
    pub code: Option<u16>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list,
        crate::routes::customers::get,
        crate::routes::customers::register,
        crate::routes::customers::update,
        crate::routes::customers::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CustomerRegistrationRequestDoc,
            CustomerUpdateRequestDoc,
            CustomerViewDoc,
            ErrorResponseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers")
    )
)]
pub struct ApiDoc;
