/// HTTP client for the country listing endpoint
use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use crate::data_provider::CountryDataProvider;
use crate::error::{ApiError, ApiResult};
use crate::query::ListQuery;
use crate::types::Country;

/// Default listing endpoint (a local json-server)
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3004/countries";

/// Thin wrapper over `reqwest::Client` bound to one listing endpoint
///
/// Requests have no timeout and are never retried.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
}

impl Client {
    pub fn new(endpoint: &str) -> ApiResult<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| ApiError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport {
                url: endpoint.to_string(),
                source: e,
            })?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Full request URL for a query, with parameters percent-encoded
    pub fn request_url(&self, query: &ListQuery) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(query.to_pairs());
        url
    }
}

#[async_trait]
impl CountryDataProvider for Client {
    async fn list_countries(&self, query: &ListQuery) -> ApiResult<Vec<Country>> {
        let url = self.request_url(query);
        debug!("HTTP: GET {}", url);

        let transport = |source| ApiError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.http.get(url.clone()).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        let countries: Vec<Country> = serde_json::from_slice(&body)?;
        debug!("HTTP: received {} countries from {}", countries.len(), url);
        Ok(countries)
    }
}
