use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::error;

/// JSON error body: `{"error": <title>, "detail": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.error, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())),
            ServiceError::Db(_) => {
                error!(err = %e, "parcel store failure");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Database Error", Some(e.to_string()))
            }
        }
    }
}
