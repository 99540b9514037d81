//! Student controller. Every endpoint answers `200 OK`; a missing student is JSON `null`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use models::student::{Student, StudentRecord};
use service::student::StudentRepository;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[utoipa::path(
    get, path = "/students/getAllStudents", tag = "students",
    responses(
        (status = 200, description = "All students", body = [crate::openapi::StudentDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn get_all_students<R: StudentRepository + 'static>(
    State(state): State<ServerState<R>>,
) -> Result<Json<Vec<Student>>, JsonApiError> {
    let list = state.students.get_all_students().await?;
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/students/getStudent/{id}", tag = "students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "The student, or null when absent", body = crate::openapi::StudentDoc)
    )
)]
pub async fn get_student<R: StudentRepository + 'static>(
    State(state): State<ServerState<R>>,
    Path(id): Path<i32>,
) -> Result<Json<Option<Student>>, JsonApiError> {
    let found = state.students.get_student_by_id(id).await?;
    Ok(Json(found))
}

#[utoipa::path(
    post, path = "/students/createStudent", tag = "students",
    request_body = crate::openapi::StudentDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::StudentDoc),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create_student<R: StudentRepository + 'static>(
    State(state): State<ServerState<R>>,
    Json(record): Json<StudentRecord>,
) -> Result<Json<Student>, JsonApiError> {
    // the store assigns ids; a client-supplied one is dropped
    let created = state.students.save_student(record.without_id()).await?;
    info!(id_student = created.id_student, "created student");
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/students/updateStudent", tag = "students",
    request_body = crate::openapi::StudentDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::StudentDoc),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update_student<R: StudentRepository + 'static>(
    State(state): State<ServerState<R>>,
    Json(record): Json<StudentRecord>,
) -> Result<Json<Student>, JsonApiError> {
    let updated = state.students.save_student(record).await?;
    info!(id_student = updated.id_student, "updated student");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/students/deleteStudent/{id}", tag = "students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Deleted, or nothing to delete"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete_student<R: StudentRepository + 'static>(
    State(state): State<ServerState<R>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, JsonApiError> {
    state.students.delete_student(id).await?;
    Ok(StatusCode::OK)
}
