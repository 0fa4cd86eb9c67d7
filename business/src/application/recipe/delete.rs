use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::delete::{DeleteRecipeParams, DeleteRecipeUseCase};

pub struct DeleteRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteRecipeUseCase for DeleteRecipeUseCaseImpl {
    async fn execute(&self, params: DeleteRecipeParams) -> Result<(), RecipeError> {
        self.logger
            .info(&format!("Deleting recipe {}", params.recipe_id));

        let recipe = self
            .repository
            .get_by_id(params.recipe_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecipeError::NotFound,
                other => RecipeError::Repository(other),
            })?;

        if !params.requester.can_modify(&recipe.author_id) {
            self.logger.warn(&format!(
                "User {} may not delete recipe {}",
                params.requester.user_id, recipe.id
            ));
            return Err(RecipeError::Forbidden);
        }

        self.repository.delete(recipe.id).await.map_err(|e| match e {
            RepositoryError::NotFound => RecipeError::NotFound,
            other => RecipeError::Repository(other),
        })?;

        self.logger.info(&format!("Recipe deleted: {}", recipe.id));
        Ok(())
    }
}
