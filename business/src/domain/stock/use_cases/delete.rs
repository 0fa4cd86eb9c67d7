use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::stock::errors::StockError;

pub struct DeleteStockParams {
    pub user_id: UserId,
    pub ingredient_id: Uuid,
}

#[async_trait]
pub trait DeleteStockUseCase: Send + Sync {
    async fn execute(&self, params: DeleteStockParams) -> Result<(), StockError>;
}
