use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeIngredientLine;

pub struct GetRecipeIngredientsParams {
    pub recipe_id: Uuid,
}

#[async_trait]
pub trait GetRecipeIngredientsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetRecipeIngredientsParams,
    ) -> Result<Vec<RecipeIngredientLine>, RecipeError>;
}
