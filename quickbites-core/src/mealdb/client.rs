//! HTTP client for TheMealDB.
//!
//! Every operation is a single GET with no retry. Failures are returned to
//! the caller as [`ApiError`]; an empty `meals` list is a successful empty
//! result.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::error::ApiError;
use super::wire::{AreaEntry, CategoryEntry, Envelope, MealRecord};
use super::RecipeSource;
use crate::models::Recipe;

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct MealDbClient {
    base_url: String,
    http: reqwest::Client,
}

impl MealDbClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = client_or_default(reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build());
        Self::with_http_client(base_url, http)
    }

    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    /// Returns the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path_and_query: &str) -> String {
        format!("{}/{}", self.base_url, path_and_query)
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, ApiError> {
        let url = self.build_url(path_and_query);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| ApiError::Transport {
            url: url.clone(),
            source: e,
        })?;

        serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            url,
            message: e.to_string(),
        })
    }

    async fn fetch_meals(&self, path_and_query: &str) -> Result<Vec<Recipe>, ApiError> {
        let envelope: Envelope<MealRecord> = self.get_json(path_and_query).await?;
        Ok(envelope.into_items().into_iter().map(Recipe::from).collect())
    }

    async fn fetch_first(&self, path_and_query: &str) -> Result<Option<Recipe>, ApiError> {
        Ok(self.fetch_meals(path_and_query).await?.into_iter().next())
    }
}

/// Falls back to reqwest's default client, which has no request timeout.
fn client_or_default(built: reqwest::Result<reqwest::Client>) -> reqwest::Client {
    built.unwrap_or_else(|e| {
        tracing::warn!(
            "Failed to build HTTP client with {}s timeout, using defaults: {}",
            REQUEST_TIMEOUT.as_secs(),
            e
        );
        reqwest::Client::new()
    })
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn search_by_text(&self, query: &str) -> Result<Vec<Recipe>, ApiError> {
        let path = format!("search.php?s={}", urlencoding::encode(query.trim()));
        self.fetch_meals(&path).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Recipe>, ApiError> {
        let path = format!("lookup.php?i={}", urlencoding::encode(id.trim()));
        self.fetch_first(&path).await
    }

    async fn get_random(&self) -> Result<Option<Recipe>, ApiError> {
        self.fetch_first("random.php").await
    }

    async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        let envelope: Envelope<CategoryEntry> = self.get_json("list.php?c=list").await?;
        Ok(envelope
            .into_items()
            .into_iter()
            .filter_map(|entry| entry.category)
            .collect())
    }

    async fn list_areas(&self) -> Result<Vec<String>, ApiError> {
        let envelope: Envelope<AreaEntry> = self.get_json("list.php?a=list").await?;
        Ok(envelope
            .into_items()
            .into_iter()
            .filter_map(|entry| entry.area)
            .collect())
    }
}
