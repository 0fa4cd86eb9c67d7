#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.not_found")]
    NotFound,
    #[error("recipe.forbidden")]
    Forbidden,
    #[error("recipe.title_empty")]
    TitleEmpty,
    #[error("recipe.title_too_long")]
    TitleTooLong,
    #[error("recipe.instructions_empty")]
    InstructionsEmpty,
    #[error("recipe.duplicated_ingredient")]
    DuplicatedIngredient(String),
    #[error("recipe.ingredient_name_too_long")]
    IngredientNameTooLong(String),
    #[error("recipe.invalid_quantity")]
    InvalidQuantity(String),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
