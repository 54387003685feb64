use thiserror::Error;

/// Failures talking to the country listing endpoint
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Could not decode country list: {0}")]
    Decode(#[from] serde_json::Error),

    /// Produced by the mock provider to simulate an unreachable server
    #[error("Simulated failure: {0}")]
    Simulated(String),
}

/// Why a render pass left the table untouched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Render target '{0}' not found")]
    MissingTarget(&'static str),

    #[error("No country records to render")]
    NoRecords,
}

pub type ApiResult<T> = Result<T, ApiError>;
