pub mod compare;
pub mod insights;
pub mod nutrition;

pub use compare::{FoodComparison, SavedFood};
pub use insights::{rank_insights, Insight};
pub use nutrition::{extract_nutrients, Nutrient, NutrientProfile, NutrientSample};
