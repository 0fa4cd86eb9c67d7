use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{Recipe, RecipeIngredientLine};
use crate::domain::recipe::use_cases::replace_ingredients::IngredientInput;
use crate::domain::shared::value_objects::UserId;

pub struct CreateRecipeParams {
    pub author_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub instructions: String,
    pub ingredients: Vec<IngredientInput>,
}

#[derive(Debug)]
pub struct CreatedRecipe {
    pub recipe: Recipe,
    pub ingredients: Vec<RecipeIngredientLine>,
}

#[async_trait]
pub trait CreateRecipeUseCase: Send + Sync {
    async fn execute(&self, params: CreateRecipeParams) -> Result<CreatedRecipe, RecipeError>;
}
