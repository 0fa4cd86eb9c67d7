use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_item::use_cases::get_all::{
    GetAllShoppingItemsParams, GetAllShoppingItemsUseCase,
};

pub struct GetAllShoppingItemsUseCaseImpl {
    pub repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllShoppingItemsUseCase for GetAllShoppingItemsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllShoppingItemsParams,
    ) -> Result<Vec<ShoppingItem>, ShoppingItemError> {
        self.logger
            .info(&format!("Getting shopping items of user {}", params.user_id));
        let items = self.repository.get_all(&params.user_id).await?;
        self.logger
            .info(&format!("Retrieved {} shopping items", items.len()));
        Ok(items)
    }
}
