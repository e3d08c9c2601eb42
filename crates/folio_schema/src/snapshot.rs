use crate::errors::{SnapshotError, SnapshotResult};
use crate::workspace::Workspace;
use std::fs;
use std::path::Path;

fn check_extension(path: &Path) -> SnapshotResult<()> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if ext == "json" {
        Ok(())
    } else {
        Err(SnapshotError::UnsupportedExtension(ext))
    }
}

/// Load a workspace snapshot from a `.json` file.
pub fn load_snapshot(path: impl AsRef<Path>) -> SnapshotResult<Workspace> {
    let path = path.as_ref();
    check_extension(path)?;
    let text = fs::read_to_string(path)?;
    let workspace = serde_json::from_str(&text)?;
    Ok(workspace)
}

/// Save a workspace snapshot to a `.json` file, pretty-printed.
pub fn save_snapshot(workspace: &Workspace, path: impl AsRef<Path>) -> SnapshotResult<()> {
    let path = path.as_ref();
    check_extension(path)?;
    let text = serde_json::to_string_pretty(workspace)?;
    fs::write(path, text)?;
    Ok(())
}
