use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for URL: {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Shortcuts document error: {0}")]
    Shortcuts(String),

    #[error("Preference storage error: {0}")]
    Preferences(String),
}

pub type Result<T> = std::result::Result<T, Error>;
