use std::env;
use tracing::warn;

pub const DEFAULT_API_BASE_URL: &str = "https://doctor-cuure-backend.onrender.com";
pub const DEFAULT_SCROLL_TOP_THRESHOLD: f64 = 300.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub scroll_top_threshold: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            scroll_top_threshold: DEFAULT_SCROLL_TOP_THRESHOLD,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("BOOKING_API_BASE_URL")
            .unwrap_or_else(|| {
                warn!("BOOKING_API_BASE_URL not set, using default");
                DEFAULT_API_BASE_URL.to_string()
            });

        let scroll_top_threshold = match lookup("SCROLL_TOP_THRESHOLD") {
            Some(raw) => raw.trim().parse::<f64>().unwrap_or_else(|_| {
                warn!("SCROLL_TOP_THRESHOLD is not a number ({}), using default", raw);
                DEFAULT_SCROLL_TOP_THRESHOLD
            }),
            None => DEFAULT_SCROLL_TOP_THRESHOLD,
        };

        let config = Self::new(api_base_url, scroll_top_threshold);

        if !config.is_configured() {
            warn!("Booking API base URL is empty - slot and booking requests will fail");
        }

        config
    }

    pub fn new(api_base_url: impl Into<String>, scroll_top_threshold: f64) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            scroll_top_threshold,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_base_url.is_empty()
    }

    /// Full URL of a service endpoint, `path` starting with `/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup_in(&[]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = AppConfig::from_lookup(lookup_in(&[
            ("BOOKING_API_BASE_URL", "http://localhost:8080"),
            ("SCROLL_TOP_THRESHOLD", " 120 "),
        ]));
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.scroll_top_threshold, 120.0);
    }

    #[test]
    fn unparseable_threshold_falls_back_to_default() {
        let config = AppConfig::from_lookup(lookup_in(&[("SCROLL_TOP_THRESHOLD", "lots")]));
        assert_eq!(config.scroll_top_threshold, DEFAULT_SCROLL_TOP_THRESHOLD);
    }

    #[test]
    fn trailing_slash_from_env_is_stripped() {
        let config = AppConfig::from_lookup(lookup_in(&[(
            "BOOKING_API_BASE_URL",
            "https://clinic.example.com/",
        )]));
        assert_eq!(config.api_base_url, "https://clinic.example.com");
        assert_eq!(
            config.endpoint("/create-appointment"),
            "https://clinic.example.com/create-appointment"
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = AppConfig::new("http://localhost:8080/", 300.0);
        assert_eq!(config.endpoint("/available-slots"), "http://localhost:8080/available-slots");
    }

    #[test]
    fn default_points_at_hosted_service() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.scroll_top_threshold, 300.0);
        assert!(config.is_configured());
    }

    #[test]
    fn empty_base_url_is_not_configured() {
        assert!(!AppConfig::new("", 300.0).is_configured());
    }
}
