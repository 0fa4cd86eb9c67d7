use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::meal_plan::model::MealPlanEntry;
use business::domain::meal_plan::value_objects::MealTime;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct MealPlanEntity {
    pub id: Uuid,
    pub user_id: String,
    pub recipe_id: Uuid,
    pub plan_date: NaiveDate,
    pub meal_time: String,
    pub created_at: DateTime<Utc>,
}

impl MealPlanEntity {
    /// Fails on a `meal_time` column the domain does not know.
    pub fn try_into_domain(self) -> Result<MealPlanEntry, RepositoryError> {
        let meal_time = self.meal_time.parse::<MealTime>().map_err(|e| {
            tracing::error!(meal_plan_id = %self.id, "Corrupt meal plan row: {}", e);
            RepositoryError::DatabaseError
        })?;

        Ok(MealPlanEntry::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.recipe_id,
            self.plan_date,
            meal_time,
            self.created_at,
        ))
    }
}
