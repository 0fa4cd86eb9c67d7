use poem_openapi::Object;

use business::domain::shopping_list::model::ShoppingListEntry;

#[derive(Debug, Clone, Object)]
pub struct ShoppingListEntryResponse {
    /// Ingredient name
    pub name: String,
    /// Amount still to buy, e.g. "907.18 g"
    pub quantity: String,
    /// Always "needed"
    pub status: String,
}

impl From<ShoppingListEntry> for ShoppingListEntryResponse {
    fn from(entry: ShoppingListEntry) -> Self {
        Self {
            name: entry.name,
            quantity: entry.quantity,
            status: entry.status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shopping_list::model::ShoppingListStatus;

    #[test]
    fn should_expose_status_as_needed() {
        let response = ShoppingListEntryResponse::from(ShoppingListEntry {
            name: "Harina".to_string(),
            quantity: "500 g".to_string(),
            status: ShoppingListStatus::Needed,
        });

        assert_eq!(response.status, "needed");
        assert_eq!(response.quantity, "500 g");
    }
}
