use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Recipe, RecipeIngredient};

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError>;
    /// Stores a new recipe and its lines, including any new or re-measured
    /// master ingredients, in one transaction.
    async fn create(&self, recipe: &Recipe, ingredients: &[RecipeIngredient]) -> Result<(), RepositoryError>;
    /// Removes a recipe along with its lines and meal plan entries.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait RecipeIngredientRepository: Send + Sync {
    /// Lines of a recipe in their recorded order.
    async fn get_by_recipe(&self, recipe_id: Uuid) -> Result<Vec<RecipeIngredient>, RepositoryError>;
    /// Replaces every line of a recipe at once. The master ingredients of the
    /// new lines are upserted in the same transaction.
    async fn replace_for_recipe(
        &self,
        recipe_id: Uuid,
        ingredients: &[RecipeIngredient],
    ) -> Result<(), RepositoryError>;
}
