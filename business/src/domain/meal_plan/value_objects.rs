use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealTime {
    Breakfast,
    Lunch,
    Dinner,
}

impl std::fmt::Display for MealTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealTime::Breakfast => write!(f, "breakfast"),
            MealTime::Lunch => write!(f, "lunch"),
            MealTime::Dinner => write!(f, "dinner"),
        }
    }
}

impl std::str::FromStr for MealTime {
    type Err = String;

    /// Accepts the English names and the Spanish ones the frontend sends.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" | "desayuno" => Ok(MealTime::Breakfast),
            "lunch" | "comida" => Ok(MealTime::Lunch),
            "dinner" | "cena" => Ok(MealTime::Dinner),
            _ => Err(format!("Invalid meal time: {}", s)),
        }
    }
}
