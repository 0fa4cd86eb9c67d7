use uuid::Uuid;

use crate::domain::unit::COUNT_UNIT;

/// Units that only mean "some amount" and may be replaced by a real one.
const PLACEHOLDER_UNITS: [&str; 2] = [COUNT_UNIT, "unit"];

/// Master ingredient shared by every recipe that uses it.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub unit: Option<String>,
}

impl Ingredient {
    /// New master ingredients start out counted in `ud`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            unit: Some(COUNT_UNIT.to_string()),
        }
    }

    pub fn from_repository(id: Uuid, name: String, unit: Option<String>) -> Self {
        Self { id, name, unit }
    }

    pub fn has_placeholder_unit(&self) -> bool {
        self.unit
            .as_deref()
            .is_some_and(|u| PLACEHOLDER_UNITS.contains(&u))
    }

    /// Takes `unit` as master unit if the current one is a placeholder.
    /// Returns whether the ingredient changed.
    pub fn adopt_unit(&mut self, unit: &str) -> bool {
        if !self.has_placeholder_unit() || self.unit.as_deref() == Some(unit) {
            return false;
        }
        self.unit = Some(unit.to_string());
        true
    }
}
