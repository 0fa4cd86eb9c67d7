#[derive(Debug, thiserror::Error)]
pub enum MealPlanError {
    #[error("meal_plan.not_found")]
    NotFound,
    #[error("meal_plan.recipe_not_found")]
    RecipeNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
