use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No tracker URL configured")]
    NoTrackerUrlConfigured,

    #[error("No issue ids to query")]
    NoIssuesFound,

    #[error("Tracker responded with HTTP {0}")]
    HttpStatus(u16),

    #[error("Malformed tracker response: {0}")]
    MalformedResponse(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
