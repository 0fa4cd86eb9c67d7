use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::meal_plan::errors::MealPlanError;
use crate::domain::shared::value_objects::UserId;

pub struct DeleteMealPlanEntryParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait DeleteMealPlanEntryUseCase: Send + Sync {
    async fn execute(&self, params: DeleteMealPlanEntryParams) -> Result<(), MealPlanError>;
}
