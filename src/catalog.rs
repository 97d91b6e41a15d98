//! Predefined quick-add foods.
//!
//! The catalog is fixed at build time; users cannot edit it. Portion sizes
//! are baked into the names so one tap logs a complete entry.

use crate::models::QuickAddItem;

const QUICK_ADD: [(&str, f64, f64, f64, f64); 8] = [
    ("Blanc de poulet 150g", 165.0, 31.0, 0.0, 4.0),
    ("Riz cuit 100g", 130.0, 3.0, 28.0, 0.0),
    ("Oeuf entier", 78.0, 6.0, 0.0, 5.0),
    ("Skyr 200g", 120.0, 20.0, 8.0, 0.0),
    ("Amandes 30g", 174.0, 6.0, 5.0, 15.0),
    ("Patate douce 150g", 129.0, 2.0, 30.0, 0.0),
    ("Saumon 150g", 280.0, 36.0, 0.0, 14.0),
    ("Whey 30g", 120.0, 24.0, 3.0, 2.0),
];

/// The quick-add catalog, in display order.
pub fn quick_add_catalog() -> Vec<QuickAddItem> {
    QUICK_ADD
        .iter()
        .map(|&(name, calories, protein_g, carbs_g, fat_g)| QuickAddItem {
            name: name.to_string(),
            calories,
            protein_g,
            carbs_g,
            fat_g,
        })
        .collect()
}
