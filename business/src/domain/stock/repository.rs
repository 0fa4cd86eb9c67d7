use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::StockEntry;

#[async_trait]
pub trait StockRepository: Send + Sync {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<StockEntry>, RepositoryError>;
    /// Inserts or replaces the entry for (user, ingredient).
    async fn save(&self, entry: &StockEntry) -> Result<(), RepositoryError>;
    /// Returns the number of removed rows.
    async fn delete(&self, user_id: &UserId, ingredient_id: Uuid) -> Result<u64, RepositoryError>;
}
