use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("entry \"{0}\" not found")]
    EntryNotFound(String),
    #[error("history entry needs a description")]
    EmptyDescription,
    #[error("invalid skip rule \"{rule}\": {reason}")]
    InvalidSkipRule { rule: String, reason: &'static str },
}

impl HistoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EntryNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, HistoryError>;
