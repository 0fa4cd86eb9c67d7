use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Ingredient;

/// Read side of the master ingredient table. Writes happen together with the
/// recipe lines that use them, see `RecipeIngredientRepository`.
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Ingredient, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Ingredient>, RepositoryError>;
}
