use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::ShoppingItem;

#[async_trait]
pub trait ShoppingItemRepository: Send + Sync {
    /// Newest first.
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<ShoppingItem>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<ShoppingItem, RepositoryError>;
    /// Case-insensitive match on the name of an item not yet checked off.
    async fn find_unchecked_by_name(
        &self,
        name: &str,
        user_id: &UserId,
    ) -> Result<Option<ShoppingItem>, RepositoryError>;
    async fn save(&self, item: &ShoppingItem) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
    async fn delete_checked(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
}
