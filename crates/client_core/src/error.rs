use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("tag list driver has stopped")]
    Closed,
    #[error("invalid API base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
