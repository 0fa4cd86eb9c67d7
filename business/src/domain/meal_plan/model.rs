use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::value_objects::MealTime;
use crate::domain::shared::value_objects::UserId;

/// A recipe assigned to a day and a meal of a user's week.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPlanEntry {
    pub id: Uuid,
    pub user_id: UserId,
    pub recipe_id: Uuid,
    pub plan_date: NaiveDate,
    pub meal_time: MealTime,
    pub created_at: DateTime<Utc>,
}

impl MealPlanEntry {
    pub fn new(user_id: UserId, recipe_id: Uuid, plan_date: NaiveDate, meal_time: MealTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            recipe_id,
            plan_date,
            meal_time,
            created_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        recipe_id: Uuid,
        plan_date: NaiveDate,
        meal_time: MealTime,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            recipe_id,
            plan_date,
            meal_time,
            created_at,
        }
    }
}
