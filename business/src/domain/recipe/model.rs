use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use super::errors::RecipeError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::model::RequirementLine;
use crate::domain::unit::normalize;

const MAX_TITLE_CHARS: usize = 150;

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: Uuid,
    pub author_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub instructions: String,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Title and instructions are required; a blank description is dropped.
    pub fn new(
        author_id: UserId,
        title: String,
        description: Option<String>,
        instructions: String,
    ) -> Result<Self, RecipeError> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(RecipeError::TitleEmpty);
        }
        if title.chars().count() > MAX_TITLE_CHARS {
            return Err(RecipeError::TitleTooLong);
        }
        let instructions = instructions.trim().to_string();
        if instructions.is_empty() {
            return Err(RecipeError::InstructionsEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            description: description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            instructions,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        author_id: UserId,
        title: String,
        description: Option<String>,
        instructions: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author_id,
            title,
            description,
            instructions,
            created_at,
        }
    }
}

/// An ingredient line of a recipe, as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeIngredient {
    pub recipe_id: Uuid,
    pub ingredient: Ingredient,
    pub quantity: Option<BigDecimal>,
    pub position: i32,
}

/// An ingredient line ready to be shown next to a recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeIngredientLine {
    pub ingredient_id: Uuid,
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

impl RecipeIngredient {
    pub fn to_line(&self) -> RecipeIngredientLine {
        let quantity = self.quantity.clone().unwrap_or_else(BigDecimal::zero);
        let normalized = normalize(&quantity, self.ingredient.unit.as_deref());
        RecipeIngredientLine {
            ingredient_id: self.ingredient.id,
            name: self.ingredient.name.clone(),
            quantity: normalized.formatted_amount(),
            unit: normalized.unit,
        }
    }

    pub fn to_requirement(&self) -> RequirementLine {
        RequirementLine {
            ingredient_id: self.ingredient.id,
            name: self.ingredient.name.clone(),
            quantity: self.quantity.clone(),
            unit: self.ingredient.unit.clone(),
        }
    }
}
