//! Strategy tree snapshot persistence
//!
//! Loading a previously built tree skips the minimax search entirely. The
//! on-disk format is JSON; the only contract is that a load reproduces the
//! saved tree exactly.

use crate::solver::StrategyNode;
use std::fmt;
use std::fs;
use std::path::Path;

/// Error type for snapshot I/O
#[derive(Debug)]
pub enum SnapshotError {
    Io(std::io::Error),
    Format(serde_json::Error),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Snapshot I/O error: {err}"),
            Self::Format(err) => write!(f, "Snapshot format error: {err}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Format(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Format(err)
    }
}

/// Check whether a snapshot exists at `path`
#[must_use]
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// Load a previously saved strategy tree
///
/// # Errors
/// Returns `SnapshotError` if the file cannot be read or does not hold a
/// valid tree. The caller decides whether to fall back to a fresh build.
pub fn load<P: AsRef<Path>>(path: P) -> Result<StrategyNode, SnapshotError> {
    let content = fs::read_to_string(path)?;
    let root = serde_json::from_str(&content)?;
    Ok(root)
}

/// Save a strategy tree, overwriting any existing snapshot
///
/// # Errors
/// Returns `SnapshotError` if serialization or the write fails.
pub fn save<P: AsRef<Path>>(path: P, root: &StrategyNode) -> Result<(), SnapshotError> {
    let content = serde_json::to_string(root)?;
    fs::write(path, content)?;
    Ok(())
}
