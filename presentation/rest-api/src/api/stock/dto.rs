use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::stock::model::StockEntry;
use business::domain::unit::{COUNT_UNIT, format_quantity};

#[derive(Debug, Clone, Object)]
pub struct SetStockRequest {
    /// Decimal amount in the ingredient's master unit, e.g. "1.5"
    pub quantity: String,
}

#[derive(Debug, Clone, Object)]
pub struct StockEntryResponse {
    pub ingredient_id: String,
    pub ingredient_name: String,
    pub quantity: String,
    /// Master unit of the ingredient
    pub unit: String,
    pub updated_at: DateTime<Utc>,
}

impl From<StockEntry> for StockEntryResponse {
    fn from(entry: StockEntry) -> Self {
        Self {
            ingredient_id: entry.ingredient_id.to_string(),
            ingredient_name: entry.ingredient_name,
            quantity: format_quantity(&entry.quantity),
            unit: entry.unit.unwrap_or_else(|| COUNT_UNIT.to_string()),
            updated_at: entry.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use business::domain::shared::value_objects::UserId;
    use std::str::FromStr;
    use uuid::Uuid;

    #[test]
    fn should_format_quantity_and_default_unit() {
        let entry = StockEntry::from_repository(
            UserId::new("1"),
            Uuid::new_v4(),
            "Sal".to_string(),
            None,
            BigDecimal::from_str("2.50").unwrap(),
            Utc::now(),
        );

        let response = StockEntryResponse::from(entry);

        assert_eq!(response.quantity, "2.5");
        assert_eq!(response.unit, "ud");
    }
}
