use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::recipe::model::RecipeIngredientLine;
use business::domain::recipe::use_cases::create::CreatedRecipe;
use business::domain::recipe::use_cases::replace_ingredients::IngredientInput;

#[derive(Debug, Clone, Object)]
pub struct IngredientInputRequest {
    pub name: String,
    /// Amount as typed, e.g. "200 gr", "1.5kg" or "2"
    pub quantity: String,
}

impl From<IngredientInputRequest> for IngredientInput {
    fn from(request: IngredientInputRequest) -> Self {
        Self {
            name: request.name,
            quantity: request.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ReplaceRecipeIngredientsRequest {
    pub ingredients: Vec<IngredientInputRequest>,
}

#[derive(Debug, Clone, Object)]
pub struct RecipeIngredientResponse {
    pub ingredient_id: String,
    pub name: String,
    /// Amount in display units
    pub quantity: String,
    pub unit: String,
}

impl From<RecipeIngredientLine> for RecipeIngredientResponse {
    fn from(line: RecipeIngredientLine) -> Self {
        Self {
            ingredient_id: line.ingredient_id.to_string(),
            name: line.name,
            quantity: line.quantity,
            unit: line.unit,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateRecipeRequest {
    /// Recipe title (cannot be empty, at most 150 characters)
    pub title: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Preparation steps (cannot be empty)
    pub instructions: String,
    #[oai(default)]
    pub ingredients: Vec<IngredientInputRequest>,
}

#[derive(Debug, Clone, Object)]
pub struct RecipeResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub instructions: String,
    pub ingredients: Vec<RecipeIngredientResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<CreatedRecipe> for RecipeResponse {
    fn from(created: CreatedRecipe) -> Self {
        let recipe = created.recipe;
        Self {
            id: recipe.id.to_string(),
            author_id: recipe.author_id.to_string(),
            title: recipe.title,
            description: recipe.description,
            instructions: recipe.instructions,
            ingredients: created
                .ingredients
                .into_iter()
                .map(RecipeIngredientResponse::from)
                .collect(),
            created_at: recipe.created_at,
        }
    }
}
