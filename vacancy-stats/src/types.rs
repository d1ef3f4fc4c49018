use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{url}' not successful, status code: {status}")]
    RequestNotOk { url: String, status: u16 },
    #[error("Failed to decode response body from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid request url: '{0}'")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Invalid header value: '{0}'")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("Publication period of {0} days reaches outside the supported date range")]
    InvalidPeriod(u32),
    #[error("Field '{field}' missing in response from '{url}'")]
    MissingField { url: String, field: &'static str },
    /// The probe request of a source failed, nothing can be collected from it.
    #[error("{url} is unavailable!")]
    SourceUnavailable {
        url: String,
        #[source]
        source: Box<Error>,
    },
}

/// A single result page that could not be fetched.
/// Recorded by the pagination walker, the walk itself carries on without it.
#[derive(Debug, Error)]
#[error("Failed to fetch page {page} from '{url}': {source}")]
pub struct PageFetchFailed {
    pub url: String,
    pub page: u32,
    #[source]
    pub source: Error,
}
