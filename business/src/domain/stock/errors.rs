#[derive(Debug, thiserror::Error)]
pub enum StockError {
    #[error("stock.negative_quantity")]
    NegativeQuantity,
    #[error("stock.invalid_quantity")]
    InvalidQuantity,
    #[error("stock.ingredient_not_found")]
    IngredientNotFound,
    #[error("stock.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
