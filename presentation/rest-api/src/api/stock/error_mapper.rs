use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::stock::errors::StockError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_body};

impl IntoErrorResponse for StockError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            StockError::NegativeQuantity => error_body(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "stock.negative_quantity",
            ),
            StockError::InvalidQuantity => error_body(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "stock.invalid_quantity",
            ),
            StockError::IngredientNotFound => error_body(
                StatusCode::NOT_FOUND,
                "NotFound",
                "stock.ingredient_not_found",
            ),
            StockError::NotFound => error_body(StatusCode::NOT_FOUND, "NotFound", "stock.not_found"),
            StockError::Repository(_) => error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
