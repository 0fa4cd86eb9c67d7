use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_item::use_cases::delete::{
    DeleteShoppingItemParams, DeleteShoppingItemUseCase,
};

pub struct DeleteShoppingItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteShoppingItemUseCase for DeleteShoppingItemUseCaseImpl {
    async fn execute(&self, params: DeleteShoppingItemParams) -> Result<(), ShoppingItemError> {
        self.logger
            .info(&format!("Deleting shopping item: {}", params.id));

        self.repository
            .get_by_id(params.id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingItemError::NotFound,
                other => ShoppingItemError::Repository(other),
            })?;

        self.repository.delete(params.id, &params.user_id).await?;

        self.logger
            .info(&format!("Shopping item deleted: {}", params.id));
        Ok(())
    }
}
