use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::shopping_item::model::ShoppingItem;

#[derive(Debug, Clone, Object)]
pub struct CreateShoppingItemRequest {
    /// Item name (cannot be empty)
    pub name: String,
    /// Free-text amount, e.g. "2 L"
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateShoppingItemRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// Empty string clears the amount
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub is_checked: Option<bool>,
}

#[derive(Debug, Clone, Object)]
pub struct ShoppingItemResponse {
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<String>,
    /// Whether the item has been checked off
    pub is_checked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShoppingItem> for ShoppingItemResponse {
    fn from(item: ShoppingItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            quantity: item.quantity,
            is_checked: item.is_checked,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ClearCheckedResponse {
    /// Number of items removed
    pub count: u64,
}
