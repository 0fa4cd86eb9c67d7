use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::meal_plan::errors::MealPlanError;
use crate::domain::meal_plan::model::MealPlanEntry;
use crate::domain::meal_plan::repository::MealPlanRepository;
use crate::domain::meal_plan::use_cases::create::{
    CreateMealPlanEntryParams, CreateMealPlanEntryUseCase,
};
use crate::domain::recipe::repository::RecipeRepository;

pub struct CreateMealPlanEntryUseCaseImpl {
    pub repository: Arc<dyn MealPlanRepository>,
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateMealPlanEntryUseCase for CreateMealPlanEntryUseCaseImpl {
    async fn execute(
        &self,
        params: CreateMealPlanEntryParams,
    ) -> Result<MealPlanEntry, MealPlanError> {
        self.logger.info(&format!(
            "Planning recipe {} for {} {}",
            params.recipe_id, params.plan_date, params.meal_time
        ));

        self.recipe_repository
            .get_by_id(params.recipe_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => MealPlanError::RecipeNotFound,
                other => MealPlanError::Repository(other),
            })?;

        let entry = MealPlanEntry::new(
            params.user_id,
            params.recipe_id,
            params.plan_date,
            params.meal_time,
        );
        self.repository.save(&entry).await?;

        self.logger
            .info(&format!("Meal plan entry created: {}", entry.id));
        Ok(entry)
    }
}
