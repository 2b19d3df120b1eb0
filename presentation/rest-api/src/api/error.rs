use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error payload shared by all endpoints. `message` carries a stable
/// machine-readable code (e.g. "gateway.unavailable") that storefront
/// clients map to localized copy.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
