use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum MergecatError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid extension: {0}")]
    InvalidExtension(String),
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}
impl MergecatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergecatError::Io {
            path: path.into(),
            source,
        }
    }
}
