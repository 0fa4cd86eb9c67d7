use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::ingredient::model::Ingredient;
use business::domain::recipe::model::{Recipe, RecipeIngredient};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct RecipeEntity {
    pub id: Uuid,
    pub author_id: String,
    pub title: String,
    pub description: Option<String>,
    pub instructions: String,
    pub created_at: DateTime<Utc>,
}

impl RecipeEntity {
    pub fn into_domain(self) -> Recipe {
        Recipe::from_repository(
            self.id,
            UserId::new(self.author_id),
            self.title,
            self.description,
            self.instructions,
            self.created_at,
        )
    }
}

/// A `recipe_ingredients` row joined with its master ingredient.
#[derive(Debug, FromRow)]
pub struct RecipeIngredientEntity {
    pub recipe_id: Uuid,
    pub ingredient_id: Uuid,
    pub name: String,
    pub unit: Option<String>,
    pub quantity: Option<BigDecimal>,
    pub position: i32,
}

impl RecipeIngredientEntity {
    pub fn into_domain(self) -> RecipeIngredient {
        RecipeIngredient {
            recipe_id: self.recipe_id,
            ingredient: Ingredient::from_repository(self.ingredient_id, self.name, self.unit),
            quantity: self.quantity,
            position: self.position,
        }
    }
}
