use std::sync::Arc;

use async_trait::async_trait;

use super::ingredient_lines::build_lines;
use crate::domain::errors::RepositoryError;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeIngredientLine;
use crate::domain::recipe::repository::{RecipeIngredientRepository, RecipeRepository};
use crate::domain::recipe::use_cases::replace_ingredients::{
    ReplaceRecipeIngredientsParams, ReplaceRecipeIngredientsUseCase,
};

pub struct ReplaceRecipeIngredientsUseCaseImpl {
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub recipe_ingredient_repository: Arc<dyn RecipeIngredientRepository>,
    pub ingredient_repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ReplaceRecipeIngredientsUseCase for ReplaceRecipeIngredientsUseCaseImpl {
    async fn execute(
        &self,
        params: ReplaceRecipeIngredientsParams,
    ) -> Result<Vec<RecipeIngredientLine>, RecipeError> {
        self.logger.info(&format!(
            "Replacing ingredients of recipe {}",
            params.recipe_id
        ));

        let recipe = self
            .recipe_repository
            .get_by_id(params.recipe_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecipeError::NotFound,
                other => RecipeError::Repository(other),
            })?;

        if !params.requester.can_modify(&recipe.author_id) {
            self.logger.warn(&format!(
                "User {} may not edit recipe {}",
                params.requester.user_id, recipe.id
            ));
            return Err(RecipeError::Forbidden);
        }

        let lines = build_lines(
            self.ingredient_repository.as_ref(),
            self.logger.as_ref(),
            recipe.id,
            params.ingredients,
        )
        .await?;

        self.recipe_ingredient_repository
            .replace_for_recipe(recipe.id, &lines)
            .await?;

        self.logger.info(&format!(
            "Recipe {} now has {} ingredients",
            recipe.id,
            lines.len()
        ));
        Ok(lines.iter().map(|l| l.to_line()).collect())
    }
}
