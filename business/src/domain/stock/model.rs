use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use super::errors::StockError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::model::StockLine;
use crate::domain::unit::storable_quantity;

/// How much of an ingredient a user keeps in the pantry.
#[derive(Debug, Clone, PartialEq)]
pub struct StockEntry {
    pub user_id: UserId,
    pub ingredient_id: Uuid,
    pub ingredient_name: String,
    pub unit: Option<String>,
    pub quantity: BigDecimal,
    pub updated_at: DateTime<Utc>,
}

impl StockEntry {
    pub fn new(
        user_id: UserId,
        ingredient: &Ingredient,
        quantity: BigDecimal,
    ) -> Result<Self, StockError> {
        if quantity < BigDecimal::zero() {
            return Err(StockError::NegativeQuantity);
        }
        let quantity = storable_quantity(&quantity).map_err(|_| StockError::InvalidQuantity)?;

        Ok(Self {
            user_id,
            ingredient_id: ingredient.id,
            ingredient_name: ingredient.name.clone(),
            unit: ingredient.unit.clone(),
            quantity,
            updated_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        user_id: UserId,
        ingredient_id: Uuid,
        ingredient_name: String,
        unit: Option<String>,
        quantity: BigDecimal,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            ingredient_id,
            ingredient_name,
            unit,
            quantity,
            updated_at,
        }
    }

    pub fn to_stock_line(&self) -> StockLine {
        StockLine {
            ingredient_id: self.ingredient_id,
            quantity: self.quantity.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_entry_with_ingredient_details() {
        let ingredient = Ingredient::from_repository(
            Uuid::new_v4(),
            "Arroz".to_string(),
            Some("kg".to_string()),
        );

        let entry = StockEntry::new(UserId::new("7"), &ingredient, BigDecimal::from(2)).unwrap();

        assert_eq!(entry.ingredient_id, ingredient.id);
        assert_eq!(entry.ingredient_name, "Arroz");
        assert_eq!(entry.unit.as_deref(), Some("kg"));
    }

    #[test]
    fn should_accept_zero_quantity() {
        let ingredient = Ingredient::new("Sal");

        assert!(StockEntry::new(UserId::new("7"), &ingredient, BigDecimal::zero()).is_ok());
    }

    #[test]
    fn should_reject_negative_quantity() {
        let ingredient = Ingredient::new("Sal");

        let result = StockEntry::new(UserId::new("7"), &ingredient, BigDecimal::from(-1));

        assert!(matches!(result, Err(StockError::NegativeQuantity)));
    }

    #[test]
    fn should_round_quantity_to_stored_scale() {
        let ingredient = Ingredient::new("Sal");

        let entry =
            StockEntry::new(UserId::new("7"), &ingredient, BigDecimal::new(5.into(), 3)).unwrap();

        assert_eq!(entry.quantity, BigDecimal::new(1.into(), 2));
    }

    #[test]
    fn should_reject_quantity_that_overflows_storage() {
        let ingredient = Ingredient::new("Arroz");

        for quantity in [BigDecimal::new(1.into(), -12), BigDecimal::new(1234567895.into(), 1)] {
            let result = StockEntry::new(UserId::new("7"), &ingredient, quantity);

            assert!(matches!(result, Err(StockError::InvalidQuantity)));
        }
    }
}
