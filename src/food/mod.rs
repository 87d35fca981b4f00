pub mod analysis;
pub mod api;
pub mod config;
pub mod format;

pub use analysis::compare::{FoodComparison, SavedFood};
pub use api::{FoodSource, UsdaClient};
pub use config::FoodConfig;
