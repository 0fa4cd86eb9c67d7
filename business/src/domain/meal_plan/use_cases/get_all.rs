use async_trait::async_trait;

use crate::domain::meal_plan::errors::MealPlanError;
use crate::domain::meal_plan::model::MealPlanEntry;
use crate::domain::shared::value_objects::UserId;

pub struct GetMealPlanParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetMealPlanUseCase: Send + Sync {
    async fn execute(&self, params: GetMealPlanParams) -> Result<Vec<MealPlanEntry>, MealPlanError>;
}
