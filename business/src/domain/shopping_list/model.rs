use std::collections::HashMap;

use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::Serialize;
use uuid::Uuid;

/// One ingredient line of a planned recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementLine {
    pub ingredient_id: Uuid,
    pub name: String,
    pub quantity: Option<BigDecimal>,
    pub unit: Option<String>,
}

impl RequirementLine {
    /// Missing quantities count as zero.
    pub fn quantity_or_zero(&self) -> BigDecimal {
        self.quantity.clone().unwrap_or_else(BigDecimal::zero)
    }
}

/// The ingredient lines of one meal-plan entry's recipe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannedRecipe {
    pub ingredients: Vec<RequirementLine>,
}

impl PlannedRecipe {
    pub fn new(ingredients: Vec<RequirementLine>) -> Self {
        Self { ingredients }
    }
}

/// What the user already has of one ingredient.
#[derive(Debug, Clone, PartialEq)]
pub struct StockLine {
    pub ingredient_id: Uuid,
    pub quantity: BigDecimal,
}

/// Cumulative requirement for one ingredient. The unit is the one of the
/// first line that mentioned the ingredient.
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredIngredient {
    pub ingredient_id: Uuid,
    pub name: String,
    pub quantity: BigDecimal,
    pub unit: Option<String>,
}

/// Requirements keyed by ingredient, iterated in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct RequirementSet {
    entries: Vec<RequiredIngredient>,
    positions: HashMap<Uuid, usize>,
}

impl RequirementSet {
    /// Adds a line to its ingredient's total, inserting the ingredient on first sight.
    /// Units are never compared or converted here.
    pub fn add(&mut self, line: &RequirementLine) {
        let quantity = line.quantity_or_zero();
        match self.positions.get(&line.ingredient_id) {
            Some(&position) => self.entries[position].quantity += quantity,
            None => {
                self.positions
                    .insert(line.ingredient_id, self.entries.len());
                self.entries.push(RequiredIngredient {
                    ingredient_id: line.ingredient_id,
                    name: line.name.clone(),
                    quantity,
                    unit: line.unit.clone(),
                });
            }
        }
    }

    /// Subtracts stock from a known ingredient. Unknown ingredients are ignored.
    pub fn subtract(&mut self, stock: &StockLine) {
        if let Some(&position) = self.positions.get(&stock.ingredient_id) {
            self.entries[position].quantity -= stock.quantity.clone();
        }
    }

    pub fn get(&self, ingredient_id: &Uuid) -> Option<&RequiredIngredient> {
        self.positions
            .get(ingredient_id)
            .map(|&position| &self.entries[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RequiredIngredient> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for RequirementSet {
    type Item = RequiredIngredient;
    type IntoIter = std::vec::IntoIter<RequiredIngredient>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShoppingListStatus {
    Needed,
}

impl std::fmt::Display for ShoppingListStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShoppingListStatus::Needed => write!(f, "needed"),
        }
    }
}

/// A display-ready line of a generated shopping list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingListEntry {
    pub name: String,
    pub quantity: String,
    pub status: ShoppingListStatus,
}
