use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("File operation failed: {0}")]
    FileOperationFailed(#[from] std::io::Error),
    #[error("Terminal not initialized")]
    TerminalNotInitialized,
}
