use std::path::PathBuf;

use crate::types::DASHNAV_DIR;

/// Returns the dashnav root directory.
///
/// Respects `DASHNAV_ROOT` if set, otherwise `.dashnav` in the current directory.
pub fn dashnav_root() -> PathBuf {
    if let Ok(root) = std::env::var("DASHNAV_ROOT") {
        PathBuf::from(root)
    } else {
        PathBuf::from(DASHNAV_DIR)
    }
}
