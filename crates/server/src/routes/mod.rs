use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use service::student::{StudentRepository, StudentService};

use crate::openapi;

pub mod health;
pub mod students;

/// Shared handler state; cloning only bumps the service refcount.
pub struct ServerState<R: StudentRepository> {
    pub students: Arc<StudentService<R>>,
}

impl<R: StudentRepository> ServerState<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { students: Arc::new(StudentService::new(repo)) }
    }
}

impl<R: StudentRepository> Clone for ServerState<R> {
    fn clone(&self) -> Self {
        Self { students: Arc::clone(&self.students) }
    }
}

/// Build the full application router, mounted under `context_path` when it is non-empty.
pub fn build_router<R: StudentRepository + 'static>(state: ServerState<R>, cors: CorsLayer, context_path: &str) -> Router {
    let routes = Router::new()
        .route("/students/getAllStudents", get(students::get_all_students::<R>))
        .route("/students/getStudent/:id", get(students::get_student::<R>))
        .route("/students/createStudent", post(students::create_student::<R>))
        .route("/students/updateStudent", put(students::update_student::<R>))
        .route("/students/deleteStudent/:id", delete(students::delete_student::<R>))
        .route("/health/check", get(health::check))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .with_state(state);

    let app = if context_path.is_empty() {
        routes
    } else {
        Router::new().nest(context_path, routes)
    };

    app.layer(cors).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
            .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}
