use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageCliError {
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Local file does not exist: {0}")]
    MissingFile(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, StorageCliError>;
