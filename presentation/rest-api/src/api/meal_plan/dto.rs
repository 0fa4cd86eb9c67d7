use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::meal_plan::model::MealPlanEntry;
use business::domain::meal_plan::value_objects::MealTime;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum MealTimeDto {
    #[oai(rename = "breakfast")]
    Breakfast,
    #[oai(rename = "lunch")]
    Lunch,
    #[oai(rename = "dinner")]
    Dinner,
}

impl From<MealTime> for MealTimeDto {
    fn from(meal_time: MealTime) -> Self {
        match meal_time {
            MealTime::Breakfast => MealTimeDto::Breakfast,
            MealTime::Lunch => MealTimeDto::Lunch,
            MealTime::Dinner => MealTimeDto::Dinner,
        }
    }
}

impl From<MealTimeDto> for MealTime {
    fn from(dto: MealTimeDto) -> Self {
        match dto {
            MealTimeDto::Breakfast => MealTime::Breakfast,
            MealTimeDto::Lunch => MealTime::Lunch,
            MealTimeDto::Dinner => MealTime::Dinner,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateMealPlanEntryRequest {
    pub recipe_id: String,
    /// Day the recipe is planned for (YYYY-MM-DD)
    pub plan_date: NaiveDate,
    pub meal_time: MealTimeDto,
}

#[derive(Debug, Clone, Object)]
pub struct MealPlanEntryResponse {
    pub id: String,
    pub recipe_id: String,
    pub plan_date: NaiveDate,
    pub meal_time: MealTimeDto,
    pub created_at: DateTime<Utc>,
}

impl From<MealPlanEntry> for MealPlanEntryResponse {
    fn from(entry: MealPlanEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            recipe_id: entry.recipe_id.to_string(),
            plan_date: entry.plan_date,
            meal_time: entry.meal_time.into(),
            created_at: entry.created_at,
        }
    }
}
