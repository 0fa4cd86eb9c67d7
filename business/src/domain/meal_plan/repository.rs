use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::MealPlanEntry;

#[async_trait]
pub trait MealPlanRepository: Send + Sync {
    /// Entries ordered by date, then meal of the day, then creation.
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<MealPlanEntry>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<MealPlanEntry, RepositoryError>;
    async fn save(&self, entry: &MealPlanEntry) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
}
