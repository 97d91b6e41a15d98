//! Coercion rules for free-text form fields.
//!
//! The host UI feeds raw text-input values straight into these helpers.
//! Malformed numeric text coerces to 0 instead of raising a validation
//! error, and a manual submission without a name or a calories value is
//! dropped without feedback. Both behaviors are intentional and match the
//! shipped app; see DESIGN.md before tightening them.

use crate::models::MealInput;

/// Parse a calorie/macro text field.
///
/// Empty or non-numeric text becomes 0. Negative text also becomes 0,
/// since stored entries only hold non-negative amounts.
pub fn parse_macro_field(text: String) -> f64 {
    let value = text.trim().parse::<f64>().unwrap_or(0.0);
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse an hour/minute text field to a raw signed value.
///
/// Range clamping happens at the reminder schedule, not here, so "25"
/// comes back as 25 and "-1" as -1. Non-numeric text becomes 0.
pub fn parse_time_field(text: String) -> i64 {
    text.trim().parse::<i64>().unwrap_or(0)
}

/// Assemble a manual meal submission from raw form fields.
///
/// Returns `None` when the name or the calories field is empty; the add
/// action then simply does nothing. Macro fields are always coerced.
pub fn manual_meal(
    name: String,
    calories: String,
    protein: String,
    carbs: String,
    fat: String,
) -> Option<MealInput> {
    let name = name.trim();
    if name.is_empty() || calories.trim().is_empty() {
        return None;
    }
    Some(MealInput {
        name: name.to_string(),
        calories: parse_macro_field(calories),
        protein_g: Some(parse_macro_field(protein)),
        carbs_g: Some(parse_macro_field(carbs)),
        fat_g: Some(parse_macro_field(fat)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn macro_field(text: &str) -> f64 {
        parse_macro_field(text.to_string())
    }

    fn meal(name: &str, calories: &str, protein: &str, carbs: &str, fat: &str) -> Option<MealInput> {
        manual_meal(
            name.to_string(),
            calories.to_string(),
            protein.to_string(),
            carbs.to_string(),
            fat.to_string(),
        )
    }

    #[test]
    fn test_macro_field_plain_numbers() {
        assert_eq!(macro_field("78"), 78.0);
        assert_eq!(macro_field(" 12.5 "), 12.5);
        assert_eq!(macro_field("0"), 0.0);
    }

    #[test]
    fn test_macro_field_coerces_to_zero() {
        assert_eq!(macro_field(""), 0.0);
        assert_eq!(macro_field("abc"), 0.0);
        assert_eq!(macro_field("12g"), 0.0);
        assert_eq!(macro_field("-5"), 0.0);
        assert_eq!(macro_field("NaN"), 0.0);
        assert_eq!(macro_field("inf"), 0.0);
    }

    #[test]
    fn test_time_field_keeps_raw_value() {
        assert_eq!(parse_time_field("25".to_string()), 25);
        assert_eq!(parse_time_field("-1".to_string()), -1);
        assert_eq!(parse_time_field("8".to_string()), 8);
        assert_eq!(parse_time_field("oops".to_string()), 0);
    }

    #[test]
    fn test_manual_meal_complete() {
        let input = meal("Poulet rôti", "250", "30", "0", "12").unwrap();
        assert_eq!(input.name, "Poulet rôti");
        assert_eq!(input.calories, 250.0);
        assert_eq!(input.protein_g, Some(30.0));
        assert_eq!(input.carbs_g, Some(0.0));
        assert_eq!(input.fat_g, Some(12.0));
    }

    #[test]
    fn test_manual_meal_requires_name_and_calories() {
        assert!(meal("", "250", "", "", "").is_none());
        assert!(meal("   ", "250", "", "", "").is_none());
        assert!(meal("Poulet", "", "", "", "").is_none());
        // "0" is a present value, not an empty field.
        assert!(meal("Eau", "0", "", "", "").is_some());
    }

    #[test]
    fn test_manual_meal_garbage_calories_accepted_as_zero() {
        let input = meal("Mystère", "beaucoup", "", "", "").unwrap();
        assert_eq!(input.calories, 0.0);
    }
}
