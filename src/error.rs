use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Environment variable not set: {0} (forgot to export JIRA_USERNAME and JIRA_PASSWORD?)")]
    MissingCredentials(String),

    #[error("Could not find an editor. Please define EDITOR or VISUAL")]
    MissingEditor,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Jira authentication failed: {0}")]
    Authentication(String),

    #[error("Jira rejected the query: {0}")]
    Query(String),

    #[error("Jira request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid issue returned by Jira: {0}")]
    InvalidIssue(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration file error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("User cancelled operation")]
    Cancelled,

    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl From<inquire::error::InquireError> for Error {
    fn from(err: inquire::error::InquireError) -> Self {
        match err {
            inquire::error::InquireError::OperationCanceled => Error::Cancelled,
            inquire::error::InquireError::OperationInterrupted => Error::Cancelled,
            other => Error::Prompt(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
