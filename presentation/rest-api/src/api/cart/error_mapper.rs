use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "cart.product_not_found",
            ),
            CartError::Gateway(_) => (
                StatusCode::BAD_GATEWAY,
                "GatewayError",
                "gateway.unavailable",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
