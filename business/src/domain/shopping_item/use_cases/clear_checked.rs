use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_item::errors::ShoppingItemError;

pub struct ClearCheckedItemsParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait ClearCheckedItemsUseCase: Send + Sync {
    async fn execute(&self, params: ClearCheckedItemsParams) -> Result<u64, ShoppingItemError>;
}
