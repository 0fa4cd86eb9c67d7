use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_item::use_cases::clear_checked::{
    ClearCheckedItemsParams, ClearCheckedItemsUseCase,
};

pub struct ClearCheckedItemsUseCaseImpl {
    pub repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCheckedItemsUseCase for ClearCheckedItemsUseCaseImpl {
    async fn execute(&self, params: ClearCheckedItemsParams) -> Result<u64, ShoppingItemError> {
        self.logger.info(&format!(
            "Clearing checked shopping items of user {}",
            params.user_id
        ));
        let count = self.repository.delete_checked(&params.user_id).await?;
        self.logger
            .info(&format!("Cleared {} checked shopping items", count));
        Ok(count)
    }
}
