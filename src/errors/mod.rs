use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum BotError {
    ApiError(String),
    ParseError(String),
    DataError(String),
    UnknownItem(String),
    NetworkError(String),
    CacheError(String),
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::ApiError(msg) => write!(f, "API Error: {}", msg),
            BotError::ParseError(msg) => write!(f, "Parse Error: {}", msg),
            BotError::DataError(msg) => write!(f, "Data Error: {}", msg),
            BotError::UnknownItem(id) => write!(f, "Unknown item id: {}", id),
            BotError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            BotError::CacheError(msg) => write!(f, "Cache Error: {}", msg),
        }
    }
}

impl Error for BotError {}

impl From<reqwest::Error> for BotError {
    fn from(err: reqwest::Error) -> Self {
        BotError::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for BotError {
    fn from(err: serde_json::Error) -> Self {
        BotError::ParseError(err.to_string())
    }
}

impl From<roxmltree::Error> for BotError {
    fn from(err: roxmltree::Error) -> Self {
        BotError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for BotError {
    fn from(err: std::io::Error) -> Self {
        BotError::CacheError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
