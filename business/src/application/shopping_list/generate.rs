use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::meal_plan::repository::MealPlanRepository;
use crate::domain::recipe::repository::RecipeIngredientRepository;
use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_item::model::ShoppingItem;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_list::builder::build_shopping_list;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{PlannedRecipe, RequirementLine, ShoppingListEntry};
use crate::domain::shopping_list::use_cases::generate::{
    GenerateShoppingListParams, GenerateShoppingListUseCase,
};
use crate::domain::stock::repository::StockRepository;

pub struct GenerateShoppingListUseCaseImpl {
    pub meal_plan_repository: Arc<dyn MealPlanRepository>,
    pub recipe_ingredient_repository: Arc<dyn RecipeIngredientRepository>,
    pub stock_repository: Arc<dyn StockRepository>,
    pub shopping_item_repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

impl GenerateShoppingListUseCaseImpl {
    /// One `PlannedRecipe` per meal-plan entry, in plan order. A recipe planned
    /// several times is loaded once and counted every time.
    async fn planned_recipes(&self, user_id: &UserId) -> Result<Vec<PlannedRecipe>, ShoppingListError> {
        let entries = self.meal_plan_repository.get_all(user_id).await?;

        let mut loaded: HashMap<Uuid, Vec<RequirementLine>> = HashMap::new();
        let mut plans = Vec::with_capacity(entries.len());
        for entry in &entries {
            if !loaded.contains_key(&entry.recipe_id) {
                let lines = self
                    .recipe_ingredient_repository
                    .get_by_recipe(entry.recipe_id)
                    .await?
                    .iter()
                    .map(|i| i.to_requirement())
                    .collect();
                loaded.insert(entry.recipe_id, lines);
            }
            let lines = loaded.get(&entry.recipe_id).cloned().unwrap_or_default();
            plans.push(PlannedRecipe::new(lines));
        }

        Ok(plans)
    }

    async fn save_to_list(
        &self,
        user_id: &UserId,
        entries: &[ShoppingListEntry],
    ) -> Result<usize, ShoppingListError> {
        let mut saved = 0;
        for entry in entries {
            if self
                .shopping_item_repository
                .find_unchecked_by_name(&entry.name, user_id)
                .await?
                .is_some()
            {
                continue;
            }

            let item = match ShoppingItem::new(
                user_id.clone(),
                entry.name.clone(),
                Some(entry.quantity.clone()),
            ) {
                Ok(item) => item,
                Err(e) => {
                    self.logger
                        .warn(&format!("Skipping shopping list line '{}': {}", entry.name, e));
                    continue;
                }
            };
            self.shopping_item_repository.save(&item).await?;
            saved += 1;
        }
        Ok(saved)
    }
}

#[async_trait]
impl GenerateShoppingListUseCase for GenerateShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: GenerateShoppingListParams,
    ) -> Result<Vec<ShoppingListEntry>, ShoppingListError> {
        self.logger.info(&format!(
            "Generating shopping list for user {}",
            params.user_id
        ));

        let plans = self.planned_recipes(&params.user_id).await?;
        let stock: Vec<_> = self
            .stock_repository
            .get_all(&params.user_id)
            .await?
            .iter()
            .map(|s| s.to_stock_line())
            .collect();

        let entries = build_shopping_list(&plans, &stock);
        self.logger.info(&format!(
            "Shopping list has {} lines from {} planned meals",
            entries.len(),
            plans.len()
        ));

        if params.save_to_list {
            let saved = self.save_to_list(&params.user_id, &entries).await?;
            self.logger
                .info(&format!("Saved {} new items to the shopping list", saved));
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::ingredient::model::Ingredient;
    use crate::domain::meal_plan::model::MealPlanEntry;
    use crate::domain::meal_plan::value_objects::MealTime;
    use crate::domain::recipe::model::RecipeIngredient;
    use crate::domain::shopping_list::model::ShoppingListStatus;
    use crate::domain::stock::model::StockEntry;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;
    use mockall::mock;
    use std::str::FromStr;

    mock! {
        pub MealPlanRepo {}

        #[async_trait]
        impl MealPlanRepository for MealPlanRepo {
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<MealPlanEntry>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<MealPlanEntry, RepositoryError>;
            async fn save(&self, entry: &MealPlanEntry) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub RecipeIngredientRepo {}

        #[async_trait]
        impl RecipeIngredientRepository for RecipeIngredientRepo {
            async fn get_by_recipe(&self, recipe_id: Uuid) -> Result<Vec<RecipeIngredient>, RepositoryError>;
            async fn replace_for_recipe(&self, recipe_id: Uuid, ingredients: &[RecipeIngredient]) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub ShoppingItemRepo {}

        #[async_trait]
        impl ShoppingItemRepository for ShoppingItemRepo {
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<ShoppingItem>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<ShoppingItem, RepositoryError>;
            async fn find_unchecked_by_name(&self, name: &str, user_id: &UserId) -> Result<Option<ShoppingItem>, RepositoryError>;
            async fn save(&self, item: &ShoppingItem) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
            async fn delete_checked(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub StockRepo {}

        #[async_trait]
        impl StockRepository for StockRepo {
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<StockEntry>, RepositoryError>;
            async fn save(&self, entry: &StockEntry) -> Result<(), RepositoryError>;
            async fn delete(&self, user_id: &UserId, ingredient_id: Uuid) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn test_user_id() -> UserId {
        UserId::new("test-user-id")
    }

    fn dec(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    fn plan_of(recipe_ids: Vec<Uuid>) -> MockMealPlanRepo {
        let mut mock = MockMealPlanRepo::new();
        mock.expect_get_all().returning(move |user_id| {
            Ok(recipe_ids
                .iter()
                .map(|&recipe_id| {
                    MealPlanEntry::new(
                        user_id.clone(),
                        recipe_id,
                        NaiveDate::from_ymd_opt(2024, 5, 13).unwrap(),
                        MealTime::Lunch,
                    )
                })
                .collect())
        });
        mock
    }

    fn recipe_with(ingredient: Ingredient, quantity: &str) -> MockRecipeIngredientRepo {
        let quantity = dec(quantity);
        let mut mock = MockRecipeIngredientRepo::new();
        mock.expect_get_by_recipe().returning(move |recipe_id| {
            Ok(vec![RecipeIngredient {
                recipe_id,
                ingredient: ingredient.clone(),
                quantity: Some(quantity.clone()),
                position: 0,
            }])
        });
        mock
    }

    fn stock_of(ingredient: &Ingredient, quantity: &str) -> MockStockRepo {
        let ingredient = ingredient.clone();
        let quantity = dec(quantity);
        let mut mock = MockStockRepo::new();
        mock.expect_get_all().returning(move |user_id| {
            Ok(vec![StockEntry::from_repository(
                user_id.clone(),
                ingredient.id,
                ingredient.name.clone(),
                ingredient.unit.clone(),
                quantity.clone(),
                chrono::Utc::now(),
            )])
        });
        mock
    }

    fn empty_stock() -> MockStockRepo {
        let mut mock = MockStockRepo::new();
        mock.expect_get_all().returning(|_| Ok(vec![]));
        mock
    }

    fn ingredient(name: &str, unit: &str) -> Ingredient {
        Ingredient::from_repository(Uuid::new_v4(), name.to_string(), Some(unit.to_string()))
    }

    fn params(save_to_list: bool) -> GenerateShoppingListParams {
        GenerateShoppingListParams {
            user_id: test_user_id(),
            save_to_list,
        }
    }

    #[tokio::test]
    async fn should_list_flour_when_stock_is_zero() {
        let flour = ingredient("Harina", "g");
        let use_case = GenerateShoppingListUseCaseImpl {
            meal_plan_repository: Arc::new(plan_of(vec![Uuid::new_v4()])),
            recipe_ingredient_repository: Arc::new(recipe_with(flour.clone(), "500")),
            stock_repository: Arc::new(stock_of(&flour, "0")),
            shopping_item_repository: Arc::new(MockShoppingItemRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(false)).await;

        assert_eq!(
            result.unwrap(),
            vec![ShoppingListEntry {
                name: "Harina".to_string(),
                quantity: "500 g".to_string(),
                status: ShoppingListStatus::Needed,
            }]
        );
    }

    #[tokio::test]
    async fn should_convert_pounds_without_stock() {
        let chicken = ingredient("Pollo", "lb");
        let use_case = GenerateShoppingListUseCaseImpl {
            meal_plan_repository: Arc::new(plan_of(vec![Uuid::new_v4()])),
            recipe_ingredient_repository: Arc::new(recipe_with(chicken, "2")),
            stock_repository: Arc::new(empty_stock()),
            shopping_item_repository: Arc::new(MockShoppingItemRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(false)).await.unwrap();

        assert_eq!(result[0].quantity, "907.18 g");
    }

    #[tokio::test]
    async fn should_omit_ingredient_covered_by_stock() {
        let sugar = ingredient("Azúcar", "oz");
        let use_case = GenerateShoppingListUseCaseImpl {
            meal_plan_repository: Arc::new(plan_of(vec![Uuid::new_v4()])),
            recipe_ingredient_repository: Arc::new(recipe_with(sugar.clone(), "3")),
            stock_repository: Arc::new(stock_of(&sugar, "85.05")),
            shopping_item_repository: Arc::new(MockShoppingItemRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(false)).await.unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn should_count_recipe_once_per_planned_meal() {
        let recipe_id = Uuid::new_v4();
        let eggs = ingredient("Huevos", "ud");
        let mut mock_lines = MockRecipeIngredientRepo::new();
        let egg_line = eggs.clone();
        mock_lines
            .expect_get_by_recipe()
            .times(1)
            .returning(move |recipe_id| {
                Ok(vec![RecipeIngredient {
                    recipe_id,
                    ingredient: egg_line.clone(),
                    quantity: Some(BigDecimal::from(2)),
                    position: 0,
                }])
            });

        let use_case = GenerateShoppingListUseCaseImpl {
            meal_plan_repository: Arc::new(plan_of(vec![recipe_id, recipe_id, recipe_id])),
            recipe_ingredient_repository: Arc::new(mock_lines),
            stock_repository: Arc::new(empty_stock()),
            shopping_item_repository: Arc::new(MockShoppingItemRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(false)).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].quantity, "6 ud");
    }

    #[tokio::test]
    async fn should_return_empty_list_without_meal_plan() {
        let mut mock_lines = MockRecipeIngredientRepo::new();
        mock_lines.expect_get_by_recipe().never();

        let use_case = GenerateShoppingListUseCaseImpl {
            meal_plan_repository: Arc::new(plan_of(vec![])),
            recipe_ingredient_repository: Arc::new(mock_lines),
            stock_repository: Arc::new(empty_stock()),
            shopping_item_repository: Arc::new(MockShoppingItemRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(false)).await.unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn should_save_only_lines_not_already_pending() {
        let recipe_id = Uuid::new_v4();
        let (flour, milk) = (ingredient("Harina", "g"), ingredient("Leche", "L"));
        let mut mock_lines = MockRecipeIngredientRepo::new();
        mock_lines.expect_get_by_recipe().returning(move |recipe_id| {
            Ok(vec![
                RecipeIngredient {
                    recipe_id,
                    ingredient: flour.clone(),
                    quantity: Some(BigDecimal::from(500)),
                    position: 0,
                },
                RecipeIngredient {
                    recipe_id,
                    ingredient: milk.clone(),
                    quantity: Some(BigDecimal::from(1)),
                    position: 1,
                },
            ])
        });

        let mut mock_items = MockShoppingItemRepo::new();
        mock_items
            .expect_find_unchecked_by_name()
            .returning(|name, user_id| {
                if name == "Leche" {
                    Ok(Some(
                        ShoppingItem::new(user_id.clone(), name.to_string(), None).unwrap(),
                    ))
                } else {
                    Ok(None)
                }
            });
        mock_items
            .expect_save()
            .withf(|item| item.name == "Harina" && item.quantity.as_deref() == Some("500 g"))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = GenerateShoppingListUseCaseImpl {
            meal_plan_repository: Arc::new(plan_of(vec![recipe_id])),
            recipe_ingredient_repository: Arc::new(mock_lines),
            stock_repository: Arc::new(empty_stock()),
            shopping_item_repository: Arc::new(mock_items),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(true)).await.unwrap();

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_plan = MockMealPlanRepo::new();
        mock_plan
            .expect_get_all()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GenerateShoppingListUseCaseImpl {
            meal_plan_repository: Arc::new(mock_plan),
            recipe_ingredient_repository: Arc::new(MockRecipeIngredientRepo::new()),
            stock_repository: Arc::new(MockStockRepo::new()),
            shopping_item_repository: Arc::new(MockShoppingItemRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(false)).await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::Repository(_)
        ));
    }
}
