//! Frontend configuration module
//!
//! Compile-time configuration for the API origin and the city the feed is
//! scoped to.

/// Number of reports the feed requests in one window.
pub const FEED_WINDOW: u32 = 50;

/// Frontend configuration for URLs and scoping.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base path of the REST API.
    pub api_base_url: String,
    /// City all feed and search requests are scoped to.
    pub home_city: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("CRIMEWATCH_API_BASE_URL")
                .unwrap_or("/api")
                .to_string(),
            home_city: option_env!("CRIMEWATCH_HOME_CITY")
                .unwrap_or("Bhopal")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base path
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Get the city the client is scoped to
    pub fn home_city(&self) -> &str {
        &self.home_city
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url.is_empty());
        assert!(!config.home_city.is_empty());
    }

    #[test]
    fn test_frontend_config_new() {
        let config = FrontendConfig::new();
        assert_eq!(config.api_base_url(), config.api_base_url.as_str());
        assert_eq!(config.home_city(), config.home_city.as_str());
    }

    #[test]
    fn test_feed_window_is_positive() {
        assert!(FEED_WINDOW > 0);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_frontend_config_in_browser() {
        let config = FrontendConfig::new();
        assert!(!config.api_base_url().is_empty());
    }
}
