use std::time::Duration;

pub const DEFAULT_API_KEY: &str = "DEMO_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct FoodConfig {
    pub usda_api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            usda_api_key: DEFAULT_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FoodConfig {
    /// Reads `USDA_API_KEY`, `USDA_BASE_URL` and `USDA_TIMEOUT_SECS`, falling
    /// back to the public demo key and endpoint. An unusable timeout is
    /// logged and replaced by the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout = match non_empty("USDA_TIMEOUT_SECS") {
            Some(raw) => match parse_timeout(&raw) {
                Some(secs) => Duration::from_secs(secs),
                None => {
                    log::warn!(
                        "Ignoring USDA_TIMEOUT_SECS='{}', using {}s",
                        raw,
                        DEFAULT_TIMEOUT_SECS
                    );
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };

        Self {
            usda_api_key: non_empty("USDA_API_KEY").unwrap_or(defaults.usda_api_key),
            base_url: non_empty("USDA_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout,
        }
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key {
            self.usda_api_key = key;
        }
        self
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url.trim_end_matches('/').to_string();
        }
        self
    }

    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Self {
        if let Some(secs) = secs.filter(|s| *s > 0) {
            self.timeout = Duration::from_secs(secs);
        }
        self
    }
}

fn parse_timeout(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = FoodConfig::from_lookup(lookup(&[]));
        assert_eq!(config.usda_api_key, "DEMO_KEY");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_environment_overrides() {
        let config = FoodConfig::from_lookup(lookup(&[
            ("USDA_API_KEY", "abc123"),
            ("USDA_BASE_URL", "http://localhost:8080/fdc/"),
            ("USDA_TIMEOUT_SECS", "3"),
        ]));
        assert_eq!(config.usda_api_key, "abc123");
        assert_eq!(config.base_url, "http://localhost:8080/fdc");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = FoodConfig::from_lookup(lookup(&[("USDA_API_KEY", "  ")]));
        assert_eq!(config.usda_api_key, "DEMO_KEY");
    }

    #[test]
    fn test_invalid_timeout_falls_back_to_default() {
        for raw in ["soon", "0", "-5"] {
            let config = FoodConfig::from_lookup(lookup(&[
                ("USDA_API_KEY", "abc123"),
                ("USDA_TIMEOUT_SECS", raw),
            ]));
            assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
            assert_eq!(config.usda_api_key, "abc123");
        }
    }

    #[test]
    fn test_builder_overrides() {
        let config = FoodConfig::default()
            .with_api_key(Some("flag-key".to_string()))
            .with_base_url(None)
            .with_timeout_secs(Some(0));
        assert_eq!(config.usda_api_key, "flag-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}
