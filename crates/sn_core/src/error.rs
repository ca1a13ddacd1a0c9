use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Scraping error: {0}")]
    Scraping(String),

    #[error("Rewrite error: {0}")]
    Rewrite(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}
