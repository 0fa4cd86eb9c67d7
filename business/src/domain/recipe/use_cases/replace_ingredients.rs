use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeIngredientLine;
use crate::domain::shared::value_objects::Requester;

/// A line as typed by the recipe author, e.g. `{ "Harina", "200 gr" }`.
pub struct IngredientInput {
    pub name: String,
    pub quantity: String,
}

pub struct ReplaceRecipeIngredientsParams {
    pub recipe_id: Uuid,
    pub requester: Requester,
    pub ingredients: Vec<IngredientInput>,
}

#[async_trait]
pub trait ReplaceRecipeIngredientsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ReplaceRecipeIngredientsParams,
    ) -> Result<Vec<RecipeIngredientLine>, RecipeError>;
}
