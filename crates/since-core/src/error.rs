//! Error types for since-core

use thiserror::Error;

/// Result type alias using since-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in since-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// OS startup registration error
    #[error("Autostart error: {0}")]
    Autostart(String),
}

/// Rejections raised while reading the settings editor form.
///
/// The display text is shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No start date was picked
    #[error("请选择起始日期")]
    MissingStartDate,

    /// The time-of-day text is not `HH:mm:ss`
    #[error("时间格式错误，请使用 HH:mm:ss 格式")]
    InvalidTimeOfDay(String),
}

/// Failures of the editor's apply/save actions.
#[derive(Error, Debug)]
pub enum EditorError {
    /// The form was rejected; nothing was applied or written
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The document was applied but could not be written to disk
    #[error("保存设置失败: {0}")]
    Persistence(#[from] Error),
}
