use std::path::PathBuf;
use thiserror::Error;

pub type SheetResult<T> = Result<T, SheetError>;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File '{}' not found.", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to open workbook: {0}")]
    Open(String),

    #[error("Sheet '{sheet}' not found in '{}'.", .path.display())]
    SheetNotFound { sheet: String, path: PathBuf },

    #[error("Column {column} not found in sheet {sheet}")]
    ColumnNotFound { column: String, sheet: String },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Failed to save workbook: {0}")]
    Write(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SheetError {
    /// True for the conditions readers report as "not found" rather than as a broken workbook
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SheetError::FileNotFound(_) | SheetError::SheetNotFound { .. }
        )
    }
}
