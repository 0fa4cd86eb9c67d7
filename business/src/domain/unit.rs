use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::Zero;

/// Generic countable unit, used when a quantity carries no unit at all.
pub const COUNT_UNIT: &str = "ud";

const DISPLAY_SCALE: i64 = 2;

/// Stored quantities are `NUMERIC(10, 2)`: at most eight integer digits.
const STORED_INTEGER_DIGITS: u32 = 8;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum UnitError {
    #[error("unit.invalid_quantity")]
    InvalidQuantity(String),
    #[error("unit.quantity_out_of_range")]
    OutOfRange(String),
}

/// A quantity expressed in its canonical display unit.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedQuantity {
    pub amount: BigDecimal,
    pub unit: String,
}

impl NormalizedQuantity {
    /// Amount rounded to two decimals, without trailing zeros.
    pub fn formatted_amount(&self) -> String {
        format_quantity(&self.amount)
    }

    /// `"<amount> <unit>"`, the form shown on shopping lists.
    pub fn display(&self) -> String {
        format!("{} {}", self.formatted_amount(), self.unit)
    }
}

fn grams_per_ounce() -> BigDecimal {
    BigDecimal::new(2835.into(), 2)
}

fn grams_per_pound() -> BigDecimal {
    BigDecimal::new(45359.into(), 2)
}

/// Converts a quantity to its canonical display unit.
///
/// Matching is case-insensitive. Ounces become grams, pounds become grams
/// (or kilograms from 1000 g upwards), and the spoon/cup/count aliases
/// collapse to their Spanish short forms. Units outside every alias
/// family are returned untouched; a missing or blank unit means `ud`.
pub fn normalize(quantity: &BigDecimal, unit: Option<&str>) -> NormalizedQuantity {
    let unit = match unit.map(str::trim) {
        Some(u) if !u.is_empty() => u,
        _ => {
            return NormalizedQuantity {
                amount: quantity.clone(),
                unit: COUNT_UNIT.to_string(),
            };
        }
    };

    let (amount, canonical) = match unit.to_lowercase().as_str() {
        "oz" | "ounce" | "ounces" | "onza" | "onzas" => (quantity * &grams_per_ounce(), "g"),
        "lb" | "pound" | "pounds" | "libra" | "libras" => {
            let grams = quantity * &grams_per_pound();
            if grams >= BigDecimal::from(1000) {
                (grams / BigDecimal::from(1000), "kg")
            } else {
                (grams, "g")
            }
        }
        "unit" | "count" => (quantity.clone(), COUNT_UNIT),
        "tbsp" | "cda" => (quantity.clone(), "cda"),
        "tsp" | "cdta" => (quantity.clone(), "cdta"),
        "cup" | "cups" | "taza" => (quantity.clone(), "taza"),
        _ => (quantity.clone(), unit),
    };

    NormalizedQuantity {
        amount,
        unit: canonical.to_string(),
    }
}

/// Renders a quantity for users: rounded half-up to two decimals, integral
/// values without a decimal point, no trailing zeros.
pub fn format_quantity(quantity: &BigDecimal) -> String {
    let rounded = quantity.with_scale_round(DISPLAY_SCALE, RoundingMode::HalfUp);
    let (digits, _) = rounded.into_bigint_and_exponent();
    let digits = digits.to_string();

    let (sign, magnitude) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits.as_str()),
    };
    let padded = format!("{:0>3}", magnitude);
    let (whole, fraction) = padded.split_at(padded.len() - DISPLAY_SCALE as usize);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{fraction}")
    }
}

/// Strict decimal parse of a user supplied quantity.
pub fn parse_quantity(raw: &str) -> Result<BigDecimal, UnitError> {
    BigDecimal::from_str(raw.trim()).map_err(|_| UnitError::InvalidQuantity(raw.to_string()))
}

/// Lenient variant of [`parse_quantity`]: absent or malformed input counts as zero.
pub fn parse_quantity_or_zero(raw: Option<&str>) -> BigDecimal {
    raw.and_then(|r| parse_quantity(r).ok())
        .unwrap_or_else(BigDecimal::zero)
}

/// Rounds a quantity half-up to two decimals and checks it fits the storage
/// column, so what is returned to the caller is exactly what gets persisted.
pub fn storable_quantity(quantity: &BigDecimal) -> Result<BigDecimal, UnitError> {
    let rounded = quantity.with_scale_round(DISPLAY_SCALE, RoundingMode::HalfUp);
    let limit = BigDecimal::from(10u64.pow(STORED_INTEGER_DIGITS));
    if rounded.abs() >= limit {
        return Err(UnitError::OutOfRange(quantity.to_string()));
    }
    Ok(rounded)
}

/// Quantity and unit extracted from a free-text amount such as `"200 gr"`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAmount {
    pub quantity: BigDecimal,
    pub unit: String,
}

/// Splits a recipe amount like `"1.5kg"` or `"3 onzas"` into quantity and unit.
///
/// When the text is not a number followed by a word, the first number found
/// anywhere in it is kept and the unit falls back to `ud`. Text without any
/// number yields zero.
pub fn parse_ingredient_amount(raw: &str) -> ParsedAmount {
    let raw = raw.trim();

    let strict = regex::Regex::new(r"^([-+]?\d*\.?\d+)\s*([a-zA-ZñÑ]*)$")
        .ok()
        .and_then(|re| re.captures(raw));

    if let Some(caps) = strict {
        let quantity = parse_quantity_or_zero(caps.get(1).map(|m| m.as_str()));
        let unit = caps
            .get(2)
            .map(|m| m.as_str().to_lowercase())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| COUNT_UNIT.to_string());
        return ParsedAmount {
            quantity,
            unit: clean_unit(&unit),
        };
    }

    let first_number = regex::Regex::new(r"[-+]?\d*\.\d+|\d+")
        .ok()
        .and_then(|re| re.find(raw))
        .map(|m| m.as_str());

    ParsedAmount {
        quantity: parse_quantity_or_zero(first_number),
        unit: COUNT_UNIT.to_string(),
    }
}

fn clean_unit(unit: &str) -> String {
    match unit {
        "g" | "gr" | "gramos" => "g",
        "kg" | "kilos" => "kg",
        "ml" | "mililitros" => "ml",
        "l" | "litros" => "L",
        "oz" | "ounce" | "ounces" => "oz",
        "lb" | "pound" | "pounds" => "lb",
        other => other,
    }
    .to_string()
}
