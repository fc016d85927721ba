use std::time::Duration;

use reqwest::{Client, Url};

use crate::api::error::ApiError;
use crate::api::types::{Meal, MealsEnvelope};
use crate::config::ApiConfig;

const SEARCH_ENDPOINT: &str = "search.php";
const LOOKUP_ENDPOINT: &str = "lookup.php";

/// Async client for the two TheMealDB endpoints the views need.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .user_agent(concat!("mealbrowse/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET search.php?s=<term>`. A `null` result set yields an empty vec.
    pub async fn search(&self, term: &str) -> Result<Vec<Meal>, ApiError> {
        let envelope = self.get(SEARCH_ENDPOINT, ("s", term)).await?;
        Ok(envelope.into_meals())
    }

    /// `GET lookup.php?i=<id>`. Returns the first element, if any.
    pub async fn lookup(&self, id: &str) -> Result<Option<Meal>, ApiError> {
        let envelope = self.get(LOOKUP_ENDPOINT, ("i", id)).await?;
        Ok(envelope.into_first())
    }

    fn endpoint_url(&self, endpoint: &'static str, param: (&str, &str)) -> Result<Url, ApiError> {
        let raw = format!("{}/{}", self.base_url, endpoint);
        Url::parse_with_params(&raw, [param]).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })
    }

    async fn get(
        &self,
        endpoint: &'static str,
        param: (&str, &str),
    ) -> Result<MealsEnvelope, ApiError> {
        let url = self.endpoint_url(endpoint, param)?;
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;

        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { endpoint, source })
    }
}
