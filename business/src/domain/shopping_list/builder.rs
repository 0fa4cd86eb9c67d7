use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::aggregator::aggregate;
use super::model::{
    PlannedRecipe, RequirementSet, ShoppingListEntry, ShoppingListStatus, StockLine,
};
use crate::domain::unit::normalize;

/// Turns residual requirements into display lines.
///
/// Only strictly positive residuals are kept; the order of `requirements`
/// is preserved.
pub fn build(requirements: RequirementSet) -> Vec<ShoppingListEntry> {
    requirements
        .into_iter()
        .filter(|required| required.quantity > BigDecimal::zero())
        .map(|required| {
            let normalized = normalize(&required.quantity, required.unit.as_deref());
            ShoppingListEntry {
                name: required.name,
                quantity: normalized.display(),
                status: ShoppingListStatus::Needed,
            }
        })
        .collect()
}

/// Full pipeline: aggregate planned recipes, subtract stock, format what is still needed.
pub fn build_shopping_list(plans: &[PlannedRecipe], stock: &[StockLine]) -> Vec<ShoppingListEntry> {
    build(aggregate(plans, stock))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use uuid::Uuid;

    use super::*;
    use crate::domain::shopping_list::model::RequirementLine;

    fn dec(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    fn planned(id: Uuid, name: &str, quantity: &str, unit: Option<&str>) -> PlannedRecipe {
        PlannedRecipe::new(vec![RequirementLine {
            ingredient_id: id,
            name: name.to_string(),
            quantity: Some(dec(quantity)),
            unit: unit.map(str::to_string),
        }])
    }

    fn stock(id: Uuid, quantity: &str) -> StockLine {
        StockLine {
            ingredient_id: id,
            quantity: dec(quantity),
        }
    }

    #[test]
    fn should_list_flour_in_grams_when_nothing_in_stock() {
        let flour = Uuid::new_v4();

        let result = build_shopping_list(
            &[planned(flour, "Harina", "500", Some("g"))],
            &[stock(flour, "0")],
        );

        assert_eq!(
            result,
            vec![ShoppingListEntry {
                name: "Harina".to_string(),
                quantity: "500 g".to_string(),
                status: ShoppingListStatus::Needed,
            }]
        );
    }

    #[test]
    fn should_convert_pounds_of_chicken_to_grams() {
        let chicken = Uuid::new_v4();

        let result = build_shopping_list(&[planned(chicken, "Pollo", "2", Some("lb"))], &[]);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].quantity, "907.18 g");
    }

    #[test]
    fn should_omit_sugar_when_stock_covers_requirement() {
        let sugar = Uuid::new_v4();

        let result = build_shopping_list(
            &[planned(sugar, "Azúcar", "3", Some("oz"))],
            &[stock(sugar, "85.05")],
        );

        assert!(result.is_empty());
    }

    #[test]
    fn should_omit_ingredient_when_residual_is_exactly_zero() {
        let eggs = Uuid::new_v4();

        let result = build_shopping_list(
            &[planned(eggs, "Huevos", "6", Some("ud"))],
            &[stock(eggs, "6")],
        );

        assert!(result.is_empty());
    }

    #[test]
    fn should_list_only_the_missing_part() {
        let milk = Uuid::new_v4();

        let result = build_shopping_list(
            &[planned(milk, "Leche", "1.5", Some("L"))],
            &[stock(milk, "1")],
        );

        assert_eq!(result[0].quantity, "0.5 L");
    }

    #[test]
    fn should_default_missing_unit_to_count() {
        let lemons = Uuid::new_v4();

        let result = build_shopping_list(&[planned(lemons, "Limón", "2.0", None)], &[]);

        assert_eq!(result[0].quantity, "2 ud");
    }

    #[test]
    fn should_mark_every_entry_as_needed() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        let result = build_shopping_list(
            &[
                planned(a, "Tomate", "4", Some("unit")),
                planned(b, "Mantequilla", "2", Some("tbsp")),
            ],
            &[],
        );

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|e| e.status == ShoppingListStatus::Needed));
        assert_eq!(result[0].quantity, "4 ud");
        assert_eq!(result[1].quantity, "2 cda");
    }

    #[test]
    fn should_return_full_requirements_when_stock_empty() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        let result = build_shopping_list(
            &[planned(a, "Arroz", "1", Some("kg")), planned(b, "Caldo", "2.5", Some("cups"))],
            &[],
        );

        let lines: Vec<(&str, &str)> = result
            .iter()
            .map(|e| (e.name.as_str(), e.quantity.as_str()))
            .collect();
        assert_eq!(lines, vec![("Arroz", "1 kg"), ("Caldo", "2.5 taza")]);
    }

    #[test]
    fn should_return_empty_list_for_empty_plan() {
        assert!(build_shopping_list(&[], &[]).is_empty());
    }
}
