use std::{fs, io::ErrorKind, path::Path};

use crate::error::AppError;

/// Reads the file as raw bytes. A file that does not exist yet loads as an
/// empty buffer and is created on the first save.
pub fn load(path: &Path) -> Result<Vec<u8>, AppError> {
    match fs::read(path) {
        Ok(bytes) => {
            tracing::debug!("loaded {} bytes from {:?}", bytes.len(), path);
            Ok(bytes)
        }
        Err(error) if error.kind() == ErrorKind::NotFound => {
            tracing::info!("file {:?} not found, starting with empty buffer", path);
            Ok(Vec::new())
        }
        Err(error) => {
            tracing::error!("loading {:?} failed: {:?}", path, error);
            Err(AppError::FileOperationFailed(error))
        }
    }
}

pub fn save(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    if let Err(error) = fs::write(path, bytes) {
        tracing::error!("saving {:?} failed: {:?}", path, error);
        return Err(AppError::FileOperationFailed(error));
    }

    tracing::debug!("saved {} bytes to {:?}", bytes.len(), path);
    Ok(())
}
