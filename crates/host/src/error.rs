use history_core::HistoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidSkipRule(HistoryError),
    #[error("invalid entry: {0}")]
    InvalidEntry(String),
    #[error("invalid target: {0}")]
    InvalidTarget(String),
    #[error("url: {0}")]
    Url(#[from] url::ParseError),
    #[error("config: {0}")]
    Config(String),
}

impl From<HistoryError> for HostError {
    fn from(e: HistoryError) -> Self {
        match e {
            HistoryError::EntryNotFound(_) => HostError::NotFound(e.to_string()),
            HistoryError::InvalidSkipRule { .. } => HostError::InvalidSkipRule(e),
            HistoryError::EmptyDescription => HostError::InvalidEntry(e.to_string()),
        }
    }
}

impl HostError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, HostError>;
