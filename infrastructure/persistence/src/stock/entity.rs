use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shared::value_objects::UserId;
use business::domain::stock::model::StockEntry;

/// A `user_stock` row joined with the ingredient's name and master unit.
#[derive(Debug, FromRow)]
pub struct StockEntity {
    pub user_id: String,
    pub ingredient_id: Uuid,
    pub name: String,
    pub unit: Option<String>,
    pub quantity: BigDecimal,
    pub updated_at: DateTime<Utc>,
}

impl StockEntity {
    pub fn into_domain(self) -> StockEntry {
        StockEntry::from_repository(
            UserId::new(self.user_id),
            self.ingredient_id,
            self.name,
            self.unit,
            self.quantity,
            self.updated_at,
        )
    }
}
