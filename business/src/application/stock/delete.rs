use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::stock::errors::StockError;
use crate::domain::stock::repository::StockRepository;
use crate::domain::stock::use_cases::delete::{DeleteStockParams, DeleteStockUseCase};

pub struct DeleteStockUseCaseImpl {
    pub repository: Arc<dyn StockRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteStockUseCase for DeleteStockUseCaseImpl {
    async fn execute(&self, params: DeleteStockParams) -> Result<(), StockError> {
        self.logger.info(&format!(
            "Removing ingredient {} from stock",
            params.ingredient_id
        ));

        let removed = self
            .repository
            .delete(&params.user_id, params.ingredient_id)
            .await?;
        if removed == 0 {
            return Err(StockError::NotFound);
        }

        Ok(())
    }
}
