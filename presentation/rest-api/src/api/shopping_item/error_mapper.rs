use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_item::errors::ShoppingItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_body};

impl IntoErrorResponse for ShoppingItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            ShoppingItemError::NameEmpty => error_body(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shopping_item.name_empty",
            ),
            ShoppingItemError::NotFound => {
                error_body(StatusCode::NOT_FOUND, "NotFound", "shopping_item.not_found")
            }
            ShoppingItemError::Repository(_) => error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
