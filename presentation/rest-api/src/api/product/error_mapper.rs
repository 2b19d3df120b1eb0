use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CatalogError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            CatalogError::Gateway(_) => (
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
