use std::fmt::Write;

use super::insights::rank_insights;
use super::nutrition::{extract_nutrients, Nutrient, NutrientProfile};
use crate::food::api::FoodRecord;

const RULE_WIDTH: usize = 80;

#[derive(Debug, Clone, PartialEq)]
pub struct SavedFood {
    pub name: String,
    pub profile: NutrientProfile,
}

impl SavedFood {
    pub fn from_record(record: &FoodRecord) -> Self {
        Self {
            name: record.description().to_string(),
            profile: extract_nutrients(record),
        }
    }
}

/// Foods the user saved this session, in save order. The same food may be
/// saved more than once.
#[derive(Debug, Default)]
pub struct FoodComparison {
    foods: Vec<SavedFood>,
}

impl FoodComparison {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, food: SavedFood) {
        log::debug!("Saving '{}' ({} saved)", food.name, self.foods.len() + 1);
        self.foods.push(food);
    }

    pub fn clear(&mut self) {
        self.foods.clear();
    }

    pub fn foods(&self) -> &[SavedFood] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn list(&self) -> String {
        if self.foods.is_empty() {
            return "\nNo foods saved for comparison yet.\n".to_string();
        }

        let mut out = format!("\nCurrently saved foods ({}):\n", self.foods.len());
        out.push_str(&self.numbered_names());
        out
    }

    /// Every nutrient reported by at least one saved food, sorted by its
    /// upstream name.
    pub fn nutrient_union(&self) -> Vec<Nutrient> {
        let mut nutrients: Vec<Nutrient> = Vec::new();
        for nutrient in self.foods.iter().flat_map(|f| f.profile.nutrients()) {
            if !nutrients.contains(&nutrient) {
                nutrients.push(nutrient);
            }
        }
        nutrients.sort_by_key(|n| n.canonical_name());
        nutrients
    }

    pub fn compare(&self) -> String {
        if self.foods.len() < 2 {
            return format!(
                "\nYou need at least 2 foods to compare. Currently saved: {}\n",
                self.foods.len()
            );
        }

        let mut out = String::new();
        let _ = writeln!(out, "\n{}", "=".repeat(RULE_WIDTH));
        let _ = writeln!(out, "{}FOOD COMPARISON", " ".repeat(25));
        let _ = writeln!(out, "{}\n", "=".repeat(RULE_WIDTH));
        let _ = writeln!(
            out,
            "Comparing {} foods (per 100g serving):\n",
            self.foods.len()
        );
        out.push_str(&self.numbered_names());
        out.push('\n');

        out.push_str(&self.render_table());

        let _ = writeln!(out, "\n{}", "=".repeat(RULE_WIDTH));
        let _ = writeln!(out, "\nKey Insights:");
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
        for insight in rank_insights(&self.foods) {
            let _ = writeln!(out, "{}", insight);
        }

        out
    }

    fn render_table(&self) -> String {
        let mut out = format!("{:<20}", "Nutrient");
        for idx in 1..=self.foods.len() {
            let _ = write!(out, "Food {:<15}", idx);
        }
        out.push('\n');
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

        for nutrient in self.nutrient_union() {
            let _ = write!(out, "{:<20}", nutrient.comparison_label());
            for food in &self.foods {
                match food.profile.get(nutrient) {
                    Some(sample) => {
                        let _ = write!(out, "{:>8.2} {:<7}", sample.value, sample.unit);
                    }
                    None => {
                        let _ = write!(out, "{:<16}", "N/A");
                    }
                }
            }
            out.push('\n');
        }

        out
    }

    fn numbered_names(&self) -> String {
        self.foods
            .iter()
            .enumerate()
            .map(|(idx, food)| format!("{}. {}\n", idx + 1, food.name))
            .collect()
    }
}
