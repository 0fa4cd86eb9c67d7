use std::collections::HashSet;

use uuid::Uuid;

use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeIngredient;
use crate::domain::recipe::use_cases::replace_ingredients::IngredientInput;
use crate::domain::unit::{parse_ingredient_amount, storable_quantity};

const MAX_INGREDIENT_NAME_CHARS: usize = 100;

/// Turns typed ingredient lines into recipe lines ready to be stored.
///
/// Blank names are skipped and a name given twice (case-insensitive) is
/// rejected before anything is looked up. Unknown ingredients are created in
/// memory; an existing one measured in a placeholder unit takes the typed
/// unit. Nothing is written here, the repository persists the master
/// ingredients together with the lines.
pub(crate) async fn build_lines(
    ingredient_repository: &dyn IngredientRepository,
    logger: &dyn Logger,
    recipe_id: Uuid,
    inputs: Vec<IngredientInput>,
) -> Result<Vec<RecipeIngredient>, RecipeError> {
    let inputs = validated(inputs)?;

    let mut lines = Vec::with_capacity(inputs.len());
    for (position, input) in inputs.into_iter().enumerate() {
        let parsed = parse_ingredient_amount(&input.quantity);
        let quantity = storable_quantity(&parsed.quantity)
            .map_err(|_| RecipeError::InvalidQuantity(input.name.clone()))?;

        let found = ingredient_repository.find_by_name(&input.name).await?;
        let ingredient = match found {
            Some(mut existing) => {
                if existing.adopt_unit(&parsed.unit) {
                    logger.debug(&format!(
                        "Ingredient {} now measured in {}",
                        existing.name, parsed.unit
                    ));
                }
                existing
            }
            None => {
                let mut created = Ingredient::new(input.name);
                created.adopt_unit(&parsed.unit);
                created
            }
        };

        lines.push(RecipeIngredient {
            recipe_id,
            ingredient,
            quantity: Some(quantity),
            position: position as i32,
        });
    }

    Ok(lines)
}

fn validated(inputs: Vec<IngredientInput>) -> Result<Vec<IngredientInput>, RecipeError> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(inputs.len());

    for input in inputs {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            continue;
        }
        if name.chars().count() > MAX_INGREDIENT_NAME_CHARS {
            return Err(RecipeError::IngredientNameTooLong(name));
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(RecipeError::DuplicatedIngredient(name));
        }
        kept.push(IngredientInput {
            name,
            quantity: input.quantity,
        });
    }

    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use async_trait::async_trait;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use std::str::FromStr;

    mock! {
        pub IngredientRepo {}

        #[async_trait]
        impl IngredientRepository for IngredientRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Ingredient, RepositoryError>;
            async fn find_by_name(&self, name: &str) -> Result<Option<Ingredient>, RepositoryError>;
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

    fn mock_logger() -> MockLog {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        logger
    }

    fn input(name: &str, quantity: &str) -> IngredientInput {
        IngredientInput {
            name: name.to_string(),
            quantity: quantity.to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_unknown_ingredient_in_typed_unit() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo.expect_find_by_name().returning(|_| Ok(None));

        let lines = build_lines(
            &mock_repo,
            &mock_logger(),
            Uuid::new_v4(),
            vec![input(" Harina ", "200 gr")],
        )
        .await
        .unwrap();

        assert_eq!(lines[0].ingredient.name, "Harina");
        assert_eq!(lines[0].ingredient.unit.as_deref(), Some("g"));
        assert_eq!(lines[0].quantity, Some(BigDecimal::from(200)));
    }

    #[tokio::test]
    async fn should_round_typed_amount_to_stored_scale() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo.expect_find_by_name().returning(|_| Ok(None));

        let lines = build_lines(
            &mock_repo,
            &mock_logger(),
            Uuid::new_v4(),
            vec![input("Levadura", "0.005 kg")],
        )
        .await
        .unwrap();

        assert_eq!(lines[0].quantity, Some(BigDecimal::from_str("0.01").unwrap()));
    }

    #[tokio::test]
    async fn should_reject_amount_too_large_to_store() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo.expect_find_by_name().returning(|_| Ok(None));

        let result = build_lines(
            &mock_repo,
            &mock_logger(),
            Uuid::new_v4(),
            vec![input("Agua", "123456789.5 ml")],
        )
        .await;

        assert!(matches!(
            result.unwrap_err(),
            RecipeError::InvalidQuantity(name) if name == "Agua"
        ));
    }

    #[tokio::test]
    async fn should_reject_name_longer_than_column() {
        let mock_repo = MockIngredientRepo::new();

        let result = build_lines(
            &mock_repo,
            &mock_logger(),
            Uuid::new_v4(),
            vec![input(&"x".repeat(101), "1")],
        )
        .await;

        assert!(matches!(
            result.unwrap_err(),
            RecipeError::IngredientNameTooLong(_)
        ));
    }

    #[tokio::test]
    async fn should_reject_duplicates_before_any_lookup() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo.expect_find_by_name().never();

        let result = build_lines(
            &mock_repo,
            &mock_logger(),
            Uuid::new_v4(),
            vec![input("Huevos", "2"), input("huevos", "3")],
        )
        .await;

        assert!(matches!(
            result.unwrap_err(),
            RecipeError::DuplicatedIngredient(name) if name == "huevos"
        ));
    }
}
