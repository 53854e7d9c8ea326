use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Spreadsheet error: {0}")]
    Parse(String),

    #[error("Issue listing failed: {0}")]
    List(String),

    #[error("Comment fetch failed: {0}")]
    Fetch(String),

    #[error("Comment creation failed: {0}")]
    Create(String),

    #[error("GitHub API error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;
