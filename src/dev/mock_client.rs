/// Mock country client for development and testing
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;

use crate::data_provider::CountryDataProvider;
use crate::error::{ApiError, ApiResult};
use crate::fixtures;
use crate::query::{FilterField, ListQuery};
use crate::types::Country;

/// Mock client that answers from fixture data instead of making real HTTP calls
///
/// Filtering, sorting and windowing follow the listing endpoint: each filter
/// is a case-insensitive substring match and the window is applied after
/// filtering. Every query is recorded so tests can assert on the requests a
/// handler made.
pub struct MockClient {
    countries: Vec<Country>,
    queries: Mutex<Vec<ListQuery>>,
    failures: AtomicUsize,
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClient {
    /// Create a new mock client backed by the fixture countries
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self::with_countries(fixtures::create_mock_countries())
    }

    pub fn with_countries(countries: Vec<Country>) -> Self {
        Self {
            countries,
            queries: Mutex::new(Vec::new()),
            failures: AtomicUsize::new(0),
        }
    }

    /// Make the next `count` requests fail
    pub fn fail_next(&self, count: usize) {
        self.failures.store(count, Ordering::SeqCst);
    }

    /// Every query received so far, oldest first
    pub fn queries(&self) -> Vec<ListQuery> {
        self.queries.lock().map(|q| q.clone()).unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.queries.lock().map(|q| q.len()).unwrap_or_default()
    }

    fn matches(country: &Country, query: &ListQuery) -> bool {
        query.filters.iter().all(|(field, term)| {
            let value = match field {
                FilterField::Name => &country.name,
                FilterField::Code => &country.code,
                FilterField::Capital => &country.capital,
                FilterField::Currency => &country.currency.name,
                FilterField::Language => &country.language.name,
            };
            value.to_lowercase().contains(term)
        })
    }

    fn take_failure(&self) -> bool {
        self.failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl CountryDataProvider for MockClient {
    async fn list_countries(&self, query: &ListQuery) -> ApiResult<Vec<Country>> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.clone());
        }

        if self.take_failure() {
            info!("MockClient: Simulating failure for {}", query.to_query_string());
            return Err(ApiError::Simulated("connection refused".to_string()));
        }

        let mut matching: Vec<&Country> = self
            .countries
            .iter()
            .filter(|country| Self::matches(country, query))
            .collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name));

        let page: Vec<Country> = matching
            .into_iter()
            .skip(query.start)
            .take(query.limit)
            .cloned()
            .collect();

        info!(
            "MockClient: Returning {} countries for {}",
            page.len(),
            query.to_query_string()
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FilterInputs;

    #[tokio::test]
    async fn test_windowing() {
        let client = MockClient::new();
        let page = client.list_countries(&ListQuery::page(20, 20)).await.unwrap();

        assert_eq!(page.len(), 20);
        assert_eq!(page[0].name, fixtures::create_mock_countries()[20].name);
    }

    #[tokio::test]
    async fn test_substring_filter() {
        let client = MockClient::new();
        let mut inputs = FilterInputs::new();
        inputs.set(FilterField::Name, "FRA");
        let query = ListQuery::new(inputs.to_filters(), 0, 1080);

        let names: Vec<String> = client
            .list_countries(&query)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["France", "French Guiana", "French Polynesia"]);
    }

    #[tokio::test]
    async fn test_fail_next() {
        let client = MockClient::new();
        client.fail_next(1);

        assert!(client.list_countries(&ListQuery::page(0, 20)).await.is_err());
        assert!(client.list_countries(&ListQuery::page(0, 20)).await.is_ok());
        assert_eq!(client.request_count(), 2);
    }
}
