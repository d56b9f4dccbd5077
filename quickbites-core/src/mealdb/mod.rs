//! Recipe data source.
//!
//! [`RecipeSource`] is the read-only catalogue the rest of the crate depends
//! on; [`MealDbClient`] implements it against TheMealDB's public JSON API.

mod client;
mod error;
pub mod wire;

use async_trait::async_trait;

pub use client::{MealDbClient, DEFAULT_BASE_URL};
pub use error::ApiError;

use crate::models::Recipe;

/// Read-only recipe catalogue.
///
/// Each call is one round trip. An unknown id is `Ok(None)`, not an error.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn search_by_text(&self, query: &str) -> Result<Vec<Recipe>, ApiError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Recipe>, ApiError>;
    async fn get_random(&self) -> Result<Option<Recipe>, ApiError>;
    async fn list_categories(&self) -> Result<Vec<String>, ApiError>;
    async fn list_areas(&self) -> Result<Vec<String>, ApiError>;
}
