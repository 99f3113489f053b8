use crate::{config::ApiConfig, error::FetchError, pipeline::CourseSource};
use log::debug;
use models::uwaterloo::{ClassSchedule, Course, Term};
use reqwest::{Client, header::ACCEPT};
use serde::de::DeserializeOwned;

const CURRENT_TERM: &str = "Terms/current";
const COURSES: &str = "Courses";
const CLASS_SCHEDULES: &str = "ClassSchedules";

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-api-key";

/// Client for the University of Waterloo Open Data API
#[derive(Debug, Clone)]
pub struct UwaterlooClient {
    client: Client,
    config: ApiConfig,
}

impl UwaterlooClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.config.base_url)
    }

    /// Requests `endpoint` and deserializes its JSON body
    async fn get<T: DeserializeOwned>(&self, endpoint: String) -> Result<T, FetchError> {
        debug!("GET {endpoint}");

        let response = self
            .client
            .get(self.url(&endpoint))
            .header(ACCEPT, "application/json")
            .header(API_KEY_HEADER, &self.config.token)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(source) => return Err(FetchError::Request { endpoint, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|source| FetchError::Request { endpoint, source })
    }
}

impl CourseSource for UwaterlooClient {
    async fn current_term(&self) -> Result<Term, FetchError> {
        self.get(CURRENT_TERM.to_string()).await
    }

    async fn courses(&self, term: &str) -> Result<Vec<Course>, FetchError> {
        self.get(format!("{COURSES}/{term}")).await
    }

    async fn class_schedules(
        &self,
        term: &str,
        subject: &str,
        number: &str,
    ) -> Result<Vec<ClassSchedule>, FetchError> {
        self.get(format!("{CLASS_SCHEDULES}/{term}/{subject}/{number}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_API_URL;

    #[test]
    fn test_endpoint_urls() {
        let config = ApiConfig::new("key".to_string(), DEFAULT_API_URL.to_string()).unwrap();
        let client = UwaterlooClient::new(config);

        assert_eq!(
            client.url(CURRENT_TERM),
            "https://openapi.data.uwaterloo.ca/v3/Terms/current"
        );
        assert_eq!(
            client.url(&format!("{CLASS_SCHEDULES}/1239/MATH/135")),
            "https://openapi.data.uwaterloo.ca/v3/ClassSchedules/1239/MATH/135"
        );
    }
}
