use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::FoodSource;
use crate::food::config::FoodConfig;

// Only the curated, lab-analysed datasets; branded products are left out.
const DATA_TYPES: &str = "Foundation,SR Legacy";
const PAGE_SIZE: usize = 5;

#[derive(Error, Debug)]
pub enum FoodApiError {
    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),
    #[error("Failed to send request: {0}")]
    Request(reqwest::Error),
    #[error("API request failed with status: {0}")]
    Status(StatusCode),
    #[error("Failed to parse response: {0}")]
    Parse(reqwest::Error),
}

/// One entry of the `foods` array. Nutrient entries stay as raw JSON so a
/// malformed one can be skipped without rejecting the whole record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodRecord {
    #[serde(default)]
    description: Option<String>,
    #[serde(default, rename = "foodNutrients")]
    nutrients: Vec<Value>,
}

impl FoodRecord {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("Unknown")
    }

    pub fn nutrient_entries(&self) -> &[Value] {
        &self.nutrients
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// `None` when the payload had no `foods` array at all.
    #[serde(default)]
    pub foods: Option<Vec<FoodRecord>>,
}

#[derive(Debug)]
pub struct UsdaClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl UsdaClient {
    pub fn new(config: FoodConfig) -> Result<Self, FoodApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FoodApiError::Client)?;

        Ok(Self {
            client,
            api_key: config.usda_api_key,
            base_url: config.base_url,
        })
    }
}

#[async_trait]
impl FoodSource for UsdaClient {
    async fn search_food(&self, query: &str) -> Result<SearchResponse, FoodApiError> {
        let url = format!("{}/foods/search", self.base_url);
        let page_size = PAGE_SIZE.to_string();

        log::info!("Searching FoodData Central for '{}'", query);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", query),
                ("api_key", self.api_key.as_str()),
                ("dataType", DATA_TYPES),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await
            .map_err(FoodApiError::Request)?;

        if !response.status().is_success() {
            log::debug!("FoodData Central answered {} for '{}'", response.status(), query);
            return Err(FoodApiError::Status(response.status()));
        }

        let result: SearchResponse = response.json().await.map_err(FoodApiError::Parse)?;
        log::debug!(
            "Received {} foods for '{}'",
            result.foods.as_ref().map_or(0, Vec::len),
            query
        );
        Ok(result)
    }
}
