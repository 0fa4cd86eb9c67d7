use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;

/// Fields left as `None` keep their current value.
pub struct UpdateShoppingItemParams {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub is_checked: Option<bool>,
}

#[async_trait]
pub trait UpdateShoppingItemUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateShoppingItemParams,
    ) -> Result<ShoppingItem, ShoppingItemError>;
}
