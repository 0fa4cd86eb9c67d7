use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_item::use_cases::create::{
    CreateShoppingItemParams, CreateShoppingItemUseCase,
};

pub struct CreateShoppingItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateShoppingItemUseCase for CreateShoppingItemUseCaseImpl {
    async fn execute(
        &self,
        params: CreateShoppingItemParams,
    ) -> Result<ShoppingItem, ShoppingItemError> {
        self.logger
            .info(&format!("Creating shopping item: {}", params.name));

        let item = ShoppingItem::new(params.user_id, params.name, params.quantity)?;
        self.repository.save(&item).await?;

        self.logger
            .info(&format!("Shopping item created: {}", item.id));
        Ok(item)
    }
}
