use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeIngredientLine;
use crate::domain::recipe::repository::{RecipeIngredientRepository, RecipeRepository};
use crate::domain::recipe::use_cases::get_ingredients::{
    GetRecipeIngredientsParams, GetRecipeIngredientsUseCase,
};

pub struct GetRecipeIngredientsUseCaseImpl {
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub recipe_ingredient_repository: Arc<dyn RecipeIngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecipeIngredientsUseCase for GetRecipeIngredientsUseCaseImpl {
    async fn execute(
        &self,
        params: GetRecipeIngredientsParams,
    ) -> Result<Vec<RecipeIngredientLine>, RecipeError> {
        self.logger
            .info(&format!("Fetching ingredients of recipe {}", params.recipe_id));

        self.recipe_repository
            .get_by_id(params.recipe_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecipeError::NotFound,
                other => RecipeError::Repository(other),
            })?;

        let ingredients = self
            .recipe_ingredient_repository
            .get_by_recipe(params.recipe_id)
            .await?;

        Ok(ingredients.iter().map(|i| i.to_line()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingredient::model::Ingredient;
    use crate::domain::recipe::model::{Recipe, RecipeIngredient};
    use crate::domain::shared::value_objects::UserId;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub RecipeIngredientRepo {}

        #[async_trait]
        impl RecipeIngredientRepository for RecipeIngredientRepo {
            async fn get_by_recipe(&self, recipe_id: Uuid) -> Result<Vec<RecipeIngredient>, RepositoryError>;
            async fn replace_for_recipe(&self, recipe_id: Uuid, ingredients: &[RecipeIngredient]) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub RecipeRepo {}

        #[async_trait]
        impl RecipeRepository for RecipeRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError>;
            async fn create(&self, recipe: &Recipe, ingredients: &[RecipeIngredient]) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn existing_recipe() -> MockRecipeRepo {
        let mut mock = MockRecipeRepo::new();
        mock.expect_get_by_id().returning(|id| {
            Ok(Recipe::from_repository(
                id,
                UserId::new("author"),
                "Bizcocho".to_string(),
                None,
                "Paso a paso".to_string(),
                chrono::Utc::now(),
            ))
        });
        mock
    }

    #[tokio::test]
    async fn should_return_normalized_lines_in_order() {
        let mut mock_lines = MockRecipeIngredientRepo::new();
        mock_lines.expect_get_by_recipe().returning(|recipe_id| {
            Ok(vec![
                RecipeIngredient {
                    recipe_id,
                    ingredient: Ingredient::from_repository(
                        Uuid::new_v4(),
                        "Azúcar".to_string(),
                        Some("oz".to_string()),
                    ),
                    quantity: Some(BigDecimal::from(2)),
                    position: 0,
                },
                RecipeIngredient {
                    recipe_id,
                    ingredient: Ingredient::from_repository(
                        Uuid::new_v4(),
                        "Huevos".to_string(),
                        None,
                    ),
                    quantity: Some(BigDecimal::from(3)),
                    position: 1,
                },
            ])
        });

        let use_case = GetRecipeIngredientsUseCaseImpl {
            recipe_repository: Arc::new(existing_recipe()),
            recipe_ingredient_repository: Arc::new(mock_lines),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetRecipeIngredientsParams {
                recipe_id: Uuid::new_v4(),
            })
            .await;

        let lines = result.unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].name, "Azúcar");
        assert_eq!((lines[0].quantity.as_str(), lines[0].unit.as_str()), ("56.7", "g"));
        assert_eq!((lines[1].quantity.as_str(), lines[1].unit.as_str()), ("3", "ud"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_recipe_missing() {
        let mut mock_recipes = MockRecipeRepo::new();
        mock_recipes
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let mut mock_lines = MockRecipeIngredientRepo::new();
        mock_lines.expect_get_by_recipe().never();

        let use_case = GetRecipeIngredientsUseCaseImpl {
            recipe_repository: Arc::new(mock_recipes),
            recipe_ingredient_repository: Arc::new(mock_lines),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetRecipeIngredientsParams {
                recipe_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), RecipeError::NotFound));
    }
}
