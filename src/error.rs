use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobsError {
    /// Transport failure: DNS, connect, TLS, timeout or body read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} responded with {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Body is not a JSON array of jobs, or a job lacks its `name`.
    #[error("Failed to decode jobs response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, JobsError>;
