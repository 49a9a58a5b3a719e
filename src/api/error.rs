use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request to {url} failed with status {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

impl ApiError {
    pub fn from_status(status: reqwest::StatusCode, url: &str) -> Self {
        ApiError::Status {
            status,
            url: url.to_string(),
        }
    }
}
