use serde::Serialize;

/// Body returned by the health endpoint.
pub const HEALTH_MESSAGE: &str = "Service is up and running!";

/// Origin allowed by CORS when nothing is configured (the local frontend dev server).
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:4200";

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
