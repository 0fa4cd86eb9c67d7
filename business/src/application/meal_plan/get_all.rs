use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::meal_plan::errors::MealPlanError;
use crate::domain::meal_plan::model::MealPlanEntry;
use crate::domain::meal_plan::repository::MealPlanRepository;
use crate::domain::meal_plan::use_cases::get_all::{GetMealPlanParams, GetMealPlanUseCase};

pub struct GetMealPlanUseCaseImpl {
    pub repository: Arc<dyn MealPlanRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMealPlanUseCase for GetMealPlanUseCaseImpl {
    async fn execute(&self, params: GetMealPlanParams) -> Result<Vec<MealPlanEntry>, MealPlanError> {
        self.logger
            .info(&format!("Fetching meal plan of user {}", params.user_id));
        let entries = self.repository.get_all(&params.user_id).await?;
        self.logger
            .info(&format!("Fetched {} meal plan entries", entries.len()));
        Ok(entries)
    }
}
