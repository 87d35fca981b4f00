use std::fmt;

use super::compare::SavedFood;
use super::nutrition::Nutrient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    Highest,
    Lowest,
}

/// Evaluated in this order; calories are a "less is better" nutrient.
const KEY_NUTRIENTS: [(Nutrient, Ranking); 3] = [
    (Nutrient::Protein, Ranking::Highest),
    (Nutrient::Fiber, Ranking::Highest),
    (Nutrient::Energy, Ranking::Lowest),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub nutrient: Nutrient,
    pub ranking: Ranking,
    /// Zero-based position of the winner in the saved list.
    pub food_index: usize,
    pub food_name: String,
    pub value: f64,
}

impl Insight {
    pub fn label(&self) -> String {
        let prefix = match self.ranking {
            Ranking::Highest => "Highest",
            Ranking::Lowest => "Lowest",
        };
        format!("{} {}", prefix, self.nutrient.comparison_label())
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "• {}: {} ({:.2})", self.label(), self.food_name, self.value)
    }
}

/// Pick a winner for each key nutrient. Needs at least two foods; nutrients
/// no saved food reports are skipped. Ties go to the food saved first.
pub fn rank_insights(foods: &[SavedFood]) -> Vec<Insight> {
    if foods.len() < 2 {
        return Vec::new();
    }

    KEY_NUTRIENTS
        .iter()
        .filter_map(|&(nutrient, ranking)| {
            let mut values: Vec<(usize, &str, f64)> = foods
                .iter()
                .enumerate()
                .filter_map(|(idx, food)| {
                    food.profile
                        .get(nutrient)
                        .map(|sample| (idx, food.name.as_str(), sample.value))
                })
                .collect();

            // sort_by is stable, so equal values keep save order
            match ranking {
                Ranking::Highest => values.sort_by(|a, b| b.2.total_cmp(&a.2)),
                Ranking::Lowest => values.sort_by(|a, b| a.2.total_cmp(&b.2)),
            }

            values.first().map(|&(food_index, name, value)| Insight {
                nutrient,
                ranking,
                food_index,
                food_name: name.to_string(),
                value,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::analysis::nutrition::{NutrientProfile, NutrientSample};

    fn saved(name: &str, samples: &[(Nutrient, f64)]) -> SavedFood {
        SavedFood {
            name: name.to_string(),
            profile: samples
                .iter()
                .map(|&(n, v)| NutrientSample::new(n, v, n.default_unit()))
                .collect::<NutrientProfile>(),
        }
    }

    #[test]
    fn test_highest_protein_prefers_first_saved_on_tie() {
        let foods = vec![
            saved("A", &[(Nutrient::Protein, 10.0)]),
            saved("B", &[(Nutrient::Protein, 20.0)]),
            saved("C", &[(Nutrient::Protein, 20.0)]),
        ];

        let insights = rank_insights(&foods);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].food_name, "B");
        assert_eq!(insights[0].food_index, 1);
        assert_eq!(insights[0].to_string(), "• Highest Protein: B (20.00)");
    }

    #[test]
    fn test_lowest_calories_wins_energy() {
        let foods = vec![
            saved("A", &[(Nutrient::Energy, 500.0)]),
            saved("B", &[(Nutrient::Energy, 300.0)]),
        ];

        let insights = rank_insights(&foods);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].label(), "Lowest Calories");
        assert_eq!(insights[0].food_name, "B");
    }

    #[test]
    fn test_order_and_skipping_of_missing_nutrients() {
        let foods = vec![
            saved("Lentils", &[(Nutrient::Energy, 116.0), (Nutrient::Fiber, 7.9)]),
            saved("Rice", &[(Nutrient::Energy, 130.0)]),
        ];

        let labels: Vec<_> = rank_insights(&foods).iter().map(Insight::label).collect();
        assert_eq!(labels, vec!["Highest Fiber", "Lowest Calories"]);
    }

    #[test]
    fn test_needs_two_foods() {
        let foods = vec![saved("Solo", &[(Nutrient::Protein, 5.0)])];
        assert!(rank_insights(&foods).is_empty());
        assert!(rank_insights(&[]).is_empty());
    }

    #[test]
    fn test_duplicate_saves_both_count() {
        let foods = vec![
            saved("Egg", &[(Nutrient::Protein, 12.6)]),
            saved("Egg", &[(Nutrient::Protein, 12.6)]),
        ];
        let insights = rank_insights(&foods);
        assert_eq!(insights[0].food_index, 0);
    }
}
