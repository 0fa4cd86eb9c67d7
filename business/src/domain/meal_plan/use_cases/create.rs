use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::meal_plan::errors::MealPlanError;
use crate::domain::meal_plan::model::MealPlanEntry;
use crate::domain::meal_plan::value_objects::MealTime;
use crate::domain::shared::value_objects::UserId;

pub struct CreateMealPlanEntryParams {
    pub user_id: UserId,
    pub recipe_id: Uuid,
    pub plan_date: NaiveDate,
    pub meal_time: MealTime,
}

#[async_trait]
pub trait CreateMealPlanEntryUseCase: Send + Sync {
    async fn execute(
        &self,
        params: CreateMealPlanEntryParams,
    ) -> Result<MealPlanEntry, MealPlanError>;
}
