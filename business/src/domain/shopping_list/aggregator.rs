use super::model::{PlannedRecipe, RequirementSet, StockLine};

/// Sums the ingredient lines of every planned recipe, then takes pantry stock off.
///
/// Residuals can end up zero or negative when the pantry already covers an
/// ingredient. Quantities are added and subtracted as raw numbers, whatever
/// unit each line was recorded in.
pub fn aggregate(plans: &[PlannedRecipe], stock: &[StockLine]) -> RequirementSet {
    let mut requirements = RequirementSet::default();

    for line in plans.iter().flat_map(|plan| &plan.ingredients) {
        requirements.add(line);
    }

    for entry in stock {
        requirements.subtract(entry);
    }

    requirements
}
