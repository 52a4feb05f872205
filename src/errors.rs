use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid file type: {name}. Only jpg, jpeg, png and gif files are supported.")]
    InvalidFileType { name: String },

    #[error("File too large: {name}. Maximum size is 10 MB.")]
    FileTooLarge { name: String },

    #[error("Index {index} out of bounds for queue of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Upload failed: {reason}")]
    UploadFailed { reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Custom result type
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn invalid_file_type(name: &str) -> Self {
        Self::InvalidFileType {
            name: name.to_string(),
        }
    }

    pub fn file_too_large(name: &str) -> Self {
        Self::FileTooLarge {
            name: name.to_string(),
        }
    }

    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    pub fn upload_failed(reason: impl Into<String>) -> Self {
        Self::UploadFailed {
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// True for rejections produced by client-side validation of a
    /// candidate file, as opposed to transport or queue failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidFileType { .. } | AppError::FileTooLarge { .. }
        )
    }
}
