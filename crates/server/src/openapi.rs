use axum::Json;
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

/// Wire shape of a student, for documentation only.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDoc {
    /// Assigned by the store; omitted on create.
    pub id_student: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// ISO-8601 calendar date.
    #[schema(example = "2001-08-10")]
    pub date_of_birth: String,
    pub address: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::check,
        crate::routes::students::get_all_students,
        crate::routes::students::get_student,
        crate::routes::students::create_student,
        crate::routes::students::update_student,
        crate::routes::students::delete_student,
    ),
    components(schemas(StudentDoc)),
    tags(
        (name = "health"),
        (name = "students")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
