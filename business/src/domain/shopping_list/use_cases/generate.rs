use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListEntry;

pub struct GenerateShoppingListParams {
    pub user_id: UserId,
    /// Also store the generated lines as manual shopping items.
    pub save_to_list: bool,
}

#[async_trait]
pub trait GenerateShoppingListUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GenerateShoppingListParams,
    ) -> Result<Vec<ShoppingListEntry>, ShoppingListError>;
}
