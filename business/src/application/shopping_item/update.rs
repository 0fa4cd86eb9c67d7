use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_item::use_cases::update::{
    UpdateShoppingItemParams, UpdateShoppingItemUseCase,
};

pub struct UpdateShoppingItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateShoppingItemUseCase for UpdateShoppingItemUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateShoppingItemParams,
    ) -> Result<ShoppingItem, ShoppingItemError> {
        self.logger
            .info(&format!("Updating shopping item: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingItemError::NotFound,
                other => ShoppingItemError::Repository(other),
            })?;

        let name = match params.name {
            Some(ref n) if n.trim().is_empty() => return Err(ShoppingItemError::NameEmpty),
            Some(n) => n.trim().to_string(),
            None => existing.name,
        };

        let quantity = match params.quantity {
            Some(q) if q.trim().is_empty() => None,
            Some(q) => Some(q),
            None => existing.quantity,
        };

        let is_checked = params.is_checked.unwrap_or(existing.is_checked);

        let updated = ShoppingItem::from_repository(
            existing.id,
            existing.user_id,
            name,
            quantity,
            is_checked,
            existing.created_at,
            chrono::Utc::now(),
        );

        self.repository.save(&updated).await?;

        self.logger
            .info(&format!("Shopping item updated: {}", updated.id));
        Ok(updated)
    }
}
