use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    MealPlan,
    Recipes,
    ShoppingItems,
    ShoppingList,
    Stock,
}
