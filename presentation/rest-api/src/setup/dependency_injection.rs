use std::sync::Arc;

use logger::TracingLogger;
use persistence::ingredient::repository::IngredientRepositoryPostgres;
use persistence::meal_plan::repository::MealPlanRepositoryPostgres;
use persistence::recipe::repository::{
    RecipeIngredientRepositoryPostgres, RecipeRepositoryPostgres,
};
use persistence::shopping_item::repository::ShoppingItemRepositoryPostgres;
use persistence::stock::repository::StockRepositoryPostgres;

use business::application::meal_plan::create::CreateMealPlanEntryUseCaseImpl;
use business::application::meal_plan::delete::DeleteMealPlanEntryUseCaseImpl;
use business::application::meal_plan::get_all::GetMealPlanUseCaseImpl;
use business::application::recipe::create::CreateRecipeUseCaseImpl;
use business::application::recipe::delete::DeleteRecipeUseCaseImpl;
use business::application::recipe::get_ingredients::GetRecipeIngredientsUseCaseImpl;
use business::application::recipe::replace_ingredients::ReplaceRecipeIngredientsUseCaseImpl;
use business::application::shopping_item::clear_checked::ClearCheckedItemsUseCaseImpl;
use business::application::shopping_item::create::CreateShoppingItemUseCaseImpl;
use business::application::shopping_item::delete::DeleteShoppingItemUseCaseImpl;
use business::application::shopping_item::get_all::GetAllShoppingItemsUseCaseImpl;
use business::application::shopping_item::update::UpdateShoppingItemUseCaseImpl;
use business::application::shopping_list::generate::GenerateShoppingListUseCaseImpl;
use business::application::stock::delete::DeleteStockUseCaseImpl;
use business::application::stock::get_all::GetStockUseCaseImpl;
use business::application::stock::set::SetStockUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::meal_plan::routes::MealPlanApi;
use crate::api::recipe::routes::RecipeApi;
use crate::api::shopping_item::routes::ShoppingItemApi;
use crate::api::shopping_list::routes::ShoppingListApi;
use crate::api::stock::routes::StockApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub meal_plan_api: MealPlanApi,
    pub recipe_api: RecipeApi,
    pub shopping_item_api: ShoppingItemApi,
    pub shopping_list_api: ShoppingListApi,
    pub stock_api: StockApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let ingredient_repository = Arc::new(IngredientRepositoryPostgres::new(pool.clone()));
        let meal_plan_repository = Arc::new(MealPlanRepositoryPostgres::new(pool.clone()));
        let recipe_repository = Arc::new(RecipeRepositoryPostgres::new(pool.clone()));
        let recipe_ingredient_repository =
            Arc::new(RecipeIngredientRepositoryPostgres::new(pool.clone()));
        let stock_repository = Arc::new(StockRepositoryPostgres::new(pool.clone()));
        let shopping_item_repository = Arc::new(ShoppingItemRepositoryPostgres::new(pool));

        // Shopping list generation
        let generate_shopping_list_use_case = Arc::new(GenerateShoppingListUseCaseImpl {
            meal_plan_repository: meal_plan_repository.clone(),
            recipe_ingredient_repository: recipe_ingredient_repository.clone(),
            stock_repository: stock_repository.clone(),
            shopping_item_repository: shopping_item_repository.clone(),
            logger: logger.clone(),
        });

        // Meal plan use cases
        let create_meal_plan_entry_use_case = Arc::new(CreateMealPlanEntryUseCaseImpl {
            repository: meal_plan_repository.clone(),
            recipe_repository: recipe_repository.clone(),
            logger: logger.clone(),
        });
        let get_meal_plan_use_case = Arc::new(GetMealPlanUseCaseImpl {
            repository: meal_plan_repository.clone(),
            logger: logger.clone(),
        });
        let delete_meal_plan_entry_use_case = Arc::new(DeleteMealPlanEntryUseCaseImpl {
            repository: meal_plan_repository,
            logger: logger.clone(),
        });

        // Stock use cases
        let set_stock_use_case = Arc::new(SetStockUseCaseImpl {
            repository: stock_repository.clone(),
            ingredient_repository: ingredient_repository.clone(),
            logger: logger.clone(),
        });
        let get_stock_use_case = Arc::new(GetStockUseCaseImpl {
            repository: stock_repository.clone(),
            logger: logger.clone(),
        });
        let delete_stock_use_case = Arc::new(DeleteStockUseCaseImpl {
            repository: stock_repository,
            logger: logger.clone(),
        });

        // Recipe use cases
        let create_recipe_use_case = Arc::new(CreateRecipeUseCaseImpl {
            repository: recipe_repository.clone(),
            ingredient_repository: ingredient_repository.clone(),
            logger: logger.clone(),
        });
        let delete_recipe_use_case = Arc::new(DeleteRecipeUseCaseImpl {
            repository: recipe_repository.clone(),
            logger: logger.clone(),
        });
        let get_recipe_ingredients_use_case = Arc::new(GetRecipeIngredientsUseCaseImpl {
            recipe_repository: recipe_repository.clone(),
            recipe_ingredient_repository: recipe_ingredient_repository.clone(),
            logger: logger.clone(),
        });
        let replace_recipe_ingredients_use_case = Arc::new(ReplaceRecipeIngredientsUseCaseImpl {
            recipe_repository,
            recipe_ingredient_repository,
            ingredient_repository,
            logger: logger.clone(),
        });

        // Shopping item use cases
        let create_shopping_item_use_case = Arc::new(CreateShoppingItemUseCaseImpl {
            repository: shopping_item_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_shopping_items_use_case = Arc::new(GetAllShoppingItemsUseCaseImpl {
            repository: shopping_item_repository.clone(),
            logger: logger.clone(),
        });
        let update_shopping_item_use_case = Arc::new(UpdateShoppingItemUseCaseImpl {
            repository: shopping_item_repository.clone(),
            logger: logger.clone(),
        });
        let delete_shopping_item_use_case = Arc::new(DeleteShoppingItemUseCaseImpl {
            repository: shopping_item_repository.clone(),
            logger: logger.clone(),
        });
        let clear_checked_use_case = Arc::new(ClearCheckedItemsUseCaseImpl {
            repository: shopping_item_repository,
            logger,
        });

        Ok(Self {
            health_api: HealthApi::new(),
            meal_plan_api: MealPlanApi::new(
                create_meal_plan_entry_use_case,
                get_meal_plan_use_case,
                delete_meal_plan_entry_use_case,
            ),
            recipe_api: RecipeApi::new(
                create_recipe_use_case,
                delete_recipe_use_case,
                get_recipe_ingredients_use_case,
                replace_recipe_ingredients_use_case,
            ),
            shopping_item_api: ShoppingItemApi::new(
                create_shopping_item_use_case,
                get_all_shopping_items_use_case,
                update_shopping_item_use_case,
                delete_shopping_item_use_case,
                clear_checked_use_case,
            ),
            shopping_list_api: ShoppingListApi::new(generate_shopping_list_use_case),
            stock_api: StockApi::new(set_stock_use_case, get_stock_use_case, delete_stock_use_case),
        })
    }
}
