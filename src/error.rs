use thiserror::Error;

#[derive(Error, Debug)]
pub enum HomophoneError {
    #[error("Dictionary '{0}' not found")]
    DictionaryNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type HomophoneResult<T> = Result<T, HomophoneError>;

impl From<toml::de::Error> for HomophoneError {
    fn from(err: toml::de::Error) -> Self {
        HomophoneError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for HomophoneError {
    fn from(err: toml::ser::Error) -> Self {
        HomophoneError::Config(err.to_string())
    }
}
