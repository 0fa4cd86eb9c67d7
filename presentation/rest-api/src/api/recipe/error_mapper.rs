use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recipe::errors::RecipeError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_body};

impl IntoErrorResponse for RecipeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            RecipeError::NotFound => error_body(StatusCode::NOT_FOUND, "NotFound", "recipe.not_found"),
            RecipeError::Forbidden => error_body(StatusCode::FORBIDDEN, "Forbidden", "recipe.forbidden"),
            RecipeError::TitleEmpty => {
                error_body(StatusCode::BAD_REQUEST, "ValidationError", "recipe.title_empty")
            }
            RecipeError::TitleTooLong => {
                error_body(StatusCode::BAD_REQUEST, "ValidationError", "recipe.title_too_long")
            }
            RecipeError::InstructionsEmpty => error_body(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "recipe.instructions_empty",
            ),
            RecipeError::DuplicatedIngredient(_) => error_body(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "recipe.duplicated_ingredient",
            ),
            RecipeError::IngredientNameTooLong(_) => error_body(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "recipe.ingredient_name_too_long",
            ),
            RecipeError::InvalidQuantity(_) => error_body(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "recipe.invalid_quantity",
            ),
            RecipeError::Repository(_) => error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_forbidden_to_403() {
        let (status, json) = RecipeError::Forbidden.into_error_response();

        assert_eq!(status.as_u16(), 403);
        assert_eq!(json.0.name, "Forbidden");
    }

    #[test]
    fn should_map_duplicated_ingredient_to_bad_request() {
        let (status, _) =
            RecipeError::DuplicatedIngredient("Sal".to_string()).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_unstorable_quantity_to_bad_request() {
        let (status, json) =
            RecipeError::InvalidQuantity("Agua".to_string()).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "recipe.invalid_quantity");
    }

    #[test]
    fn should_map_missing_title_to_bad_request() {
        let (status, json) = RecipeError::TitleEmpty.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
    }
}
