// crates/picker-core/src/error.rs

use thiserror::Error;

/// Errors produced by the picker core.
///
/// The index and controller variants indicate a host bug or a stale view
/// (for example a fast-scroll title that no longer exists after a reload).
/// The I/O variants are only produced by the catalog loaders.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("row {row} is out of range for section {section}")]
    IndexOutOfRange { section: usize, row: usize },

    #[error("section {0} is out of range")]
    SectionOutOfRange(usize),

    #[error("section title not found: {0}")]
    TitleNotFound(String),

    #[error("unknown country code: {0}")]
    UnknownCountryCode(String),

    #[error("{0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Bincode(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, PickerError>;
