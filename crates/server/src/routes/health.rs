use common::types::HEALTH_MESSAGE;

/// Liveness probe; never touches the database.
#[utoipa::path(
    get, path = "/health/check", tag = "health",
    responses((status = 200, description = "Service is running", body = String))
)]
pub async fn check() -> &'static str {
    HEALTH_MESSAGE
}
