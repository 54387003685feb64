/// Trait for providing country records, abstracting over the HTTP client and mock implementations
use async_trait::async_trait;

use crate::error::ApiResult;
use crate::query::ListQuery;
use crate::types::Country;

/// Source of country records, implemented by both the HTTP `Client` and `MockClient`
#[async_trait]
pub trait CountryDataProvider: Send + Sync {
    /// Fetch one window of the sorted, optionally filtered country list
    async fn list_countries(&self, query: &ListQuery) -> ApiResult<Vec<Country>>;
}
