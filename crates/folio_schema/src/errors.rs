use std::io;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported snapshot extension: .{0}")]
    UnsupportedExtension(String),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;
