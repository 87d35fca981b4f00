pub mod usda;

use async_trait::async_trait;

// Re-export common types
pub use usda::{FoodApiError, FoodRecord, SearchResponse, UsdaClient};

/// Anything that can answer a food search. The session only talks to this
/// trait, which keeps the HTTP client out of the command loop's tests.
#[async_trait]
pub trait FoodSource: Send + Sync {
    async fn search_food(&self, query: &str) -> Result<SearchResponse, FoodApiError>;
}
