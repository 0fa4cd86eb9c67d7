use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::stock::errors::StockError;
use crate::domain::stock::model::StockEntry;

pub struct GetStockParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetStockUseCase: Send + Sync {
    async fn execute(&self, params: GetStockParams) -> Result<Vec<StockEntry>, StockError>;
}
