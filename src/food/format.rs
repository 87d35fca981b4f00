use std::fmt::Write;

use crate::food::analysis::nutrition::{extract_nutrients, NutrientProfile};
use crate::food::api::FoodRecord;

/// Only this many results are ever shown or offered for saving.
pub const MAX_DISPLAYED: usize = 3;

const RULE_WIDTH: usize = 60;

/// Render the first few records of a search, one nutrient table each.
pub fn render_results(query: &str, foods: &[FoodRecord]) -> String {
    if foods.is_empty() {
        return format!("\nNo results found for '{}'. Try a different search term.\n", query);
    }

    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "Nutrition Results for: {}", query);
    let _ = writeln!(out, "{}\n", "=".repeat(RULE_WIDTH));

    for (idx, food) in foods.iter().take(MAX_DISPLAYED).enumerate() {
        let _ = writeln!(out, "{}. {}", idx + 1, food.description());
        let _ = writeln!(out, "   Serving Size: 100g");
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
        out.push_str(&render_profile(&extract_nutrients(food)));
        out.push('\n');
    }

    out
}

/// Rows of a single profile, in the order the nutrients were reported.
pub fn render_profile(profile: &NutrientProfile) -> String {
    if profile.is_empty() {
        return "   No detailed nutrition data available\n".to_string();
    }

    profile
        .iter()
        .map(|sample| {
            format!(
                "   {:<30}: {:>8.2} {}\n",
                sample.nutrient.display_label(),
                sample.value,
                sample.unit
            )
        })
        .collect()
}

/// Numbered description list used when asking which result to save.
pub fn render_choices(foods: &[FoodRecord]) -> String {
    foods
        .iter()
        .take(MAX_DISPLAYED)
        .enumerate()
        .map(|(idx, food)| format!("{}. {}\n", idx + 1, food.description()))
        .collect()
}
