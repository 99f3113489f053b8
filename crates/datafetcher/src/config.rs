use crate::error::PipelineError;
use std::env::VarError;

/// Base URL of the University of Waterloo Open Data API
pub const DEFAULT_API_URL: &str = "https://openapi.data.uwaterloo.ca/v3/";
/// Directory holding the `sample/` and `prod/` CSV files
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Access settings for the course-data API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub token: String,
    pub base_url: String,
}

impl ApiConfig {
    /// Reads `TOKEN` and the optional `UW_API_URL` through `lookup`
    ///
    /// # Returns
    /// [`PipelineError::MissingToken`] if no token is configured
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PipelineError>
    where
        F: Fn(&'static str) -> Result<String, VarError>,
    {
        let token = lookup("TOKEN").map_err(|_| PipelineError::MissingToken)?;
        let base_url = lookup("UW_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(token, base_url)
    }

    pub fn new(token: String, base_url: String) -> Result<Self, PipelineError> {
        if token.trim().is_empty() {
            return Err(PipelineError::MissingToken);
        }

        // Endpoints are appended directly to the base URL
        let base_url = if base_url.ends_with('/') {
            base_url
        } else {
            format!("{base_url}/")
        };

        Ok(Self { token, base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config =
            ApiConfig::new("key".to_string(), "http://localhost:8080/v3".to_string()).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/v3/");

        let config = ApiConfig::new("key".to_string(), DEFAULT_API_URL.to_string()).unwrap();
        assert_eq!(config.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_blank_token_is_missing() {
        let err = ApiConfig::new("  ".to_string(), DEFAULT_API_URL.to_string()).unwrap_err();
        assert!(matches!(err, PipelineError::MissingToken));
    }
}
