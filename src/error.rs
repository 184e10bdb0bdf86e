use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Archive could not be read: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Failed to parse edge table '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(
        "Edge table '{}' line {line}: expected {expected} columns, found {found}",
        path.display()
    )]
    ColumnCount {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Failed to write relation table '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid vocabulary: {0}")]
    Vocabulary(#[from] crate::vocabulary::VocabularyError),
}

pub type Result<T> = std::result::Result<T, ConverterError>;
