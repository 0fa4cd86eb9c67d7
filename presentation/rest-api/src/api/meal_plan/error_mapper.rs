use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::meal_plan::errors::MealPlanError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_body};

impl IntoErrorResponse for MealPlanError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            MealPlanError::NotFound => {
                error_body(StatusCode::NOT_FOUND, "NotFound", "meal_plan.not_found")
            }
            MealPlanError::RecipeNotFound => error_body(
                StatusCode::NOT_FOUND,
                "NotFound",
                "meal_plan.recipe_not_found",
            ),
            MealPlanError::Repository(_) => error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
