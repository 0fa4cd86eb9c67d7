use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ShoppingItemError;
use crate::domain::shared::value_objects::UserId;

/// A line of the user's own shopping list, typed in by hand or saved from a
/// generated list.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub quantity: Option<String>,
    pub is_checked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShoppingItem {
    pub fn new(
        user_id: UserId,
        name: String,
        quantity: Option<String>,
    ) -> Result<Self, ShoppingItemError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ShoppingItemError::NameEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            quantity: quantity.filter(|q| !q.trim().is_empty()),
            is_checked: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        name: String,
        quantity: Option<String>,
        is_checked: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            quantity,
            is_checked,
            created_at,
            updated_at,
        }
    }
}
