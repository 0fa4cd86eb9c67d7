use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::stock::errors::StockError;
use crate::domain::stock::model::StockEntry;

pub struct SetStockParams {
    pub user_id: UserId,
    pub ingredient_id: Uuid,
    pub quantity: BigDecimal,
}

#[async_trait]
pub trait SetStockUseCase: Send + Sync {
    async fn execute(&self, params: SetStockParams) -> Result<StockEntry, StockError>;
}
