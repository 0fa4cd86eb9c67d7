use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::logger::Logger;
use crate::domain::stock::errors::StockError;
use crate::domain::stock::model::StockEntry;
use crate::domain::stock::repository::StockRepository;
use crate::domain::stock::use_cases::set::{SetStockParams, SetStockUseCase};

pub struct SetStockUseCaseImpl {
    pub repository: Arc<dyn StockRepository>,
    pub ingredient_repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetStockUseCase for SetStockUseCaseImpl {
    async fn execute(&self, params: SetStockParams) -> Result<StockEntry, StockError> {
        self.logger.info(&format!(
            "Setting stock of ingredient {} to {}",
            params.ingredient_id, params.quantity
        ));

        let ingredient = self
            .ingredient_repository
            .get_by_id(params.ingredient_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => StockError::IngredientNotFound,
                other => StockError::Repository(other),
            })?;

        let entry = StockEntry::new(params.user_id, &ingredient, params.quantity)?;
        self.repository.save(&entry).await?;

        self.logger
            .info(&format!("Stock updated for ingredient {}", ingredient.name));
        Ok(entry)
    }
}
