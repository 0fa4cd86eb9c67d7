use std::sync::Arc;

use async_trait::async_trait;

use super::ingredient_lines::build_lines;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::create::{
    CreateRecipeParams, CreateRecipeUseCase, CreatedRecipe,
};

pub struct CreateRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub ingredient_repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateRecipeUseCase for CreateRecipeUseCaseImpl {
    async fn execute(&self, params: CreateRecipeParams) -> Result<CreatedRecipe, RecipeError> {
        self.logger
            .info(&format!("Creating recipe for user {}", params.author_id));

        let recipe = Recipe::new(
            params.author_id,
            params.title,
            params.description,
            params.instructions,
        )?;

        let lines = build_lines(
            self.ingredient_repository.as_ref(),
            self.logger.as_ref(),
            recipe.id,
            params.ingredients,
        )
        .await?;

        self.repository.create(&recipe, &lines).await?;

        self.logger.info(&format!(
            "Recipe created: {} with {} ingredients",
            recipe.id,
            lines.len()
        ));
        Ok(CreatedRecipe {
            recipe,
            ingredients: lines.iter().map(|l| l.to_line()).collect(),
        })
    }
}
