//! Utility functions for directory management
//!
//! This module provides helper functions following the XDG Base Directory specification
//! for portable data storage across platforms.
//!
//! # Directory Structure
//!
//! - Data: `~/.local/share/netsketch/` - Configuration and the stored collections
//! - State: `~/.local/state/netsketch/` - Log file
//!
//! # Example
//!
//! ```
//! use netsketch::utils::{get_data_dir, ensure_dir};
//!
//! if let Some(data_path) = get_data_dir() {
//!     // Load configuration from data_path
//! }
//! ```

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "netsketch", "netsketch")
}

pub fn get_data_dir() -> Option<PathBuf> {
    project_dirs().map(|pd| pd.data_dir().to_path_buf())
}

/// State directory for logs. Not every platform has one; callers fall back to
/// the data directory.
pub fn get_state_dir() -> Option<PathBuf> {
    project_dirs().and_then(|pd| pd.state_dir().map(Path::to_path_buf))
}

/// Creates `dir` (and parents) with owner-only access on Unix
pub fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        DirBuilder::new()
            .mode(0o700) // User read/write/execute only
            .recursive(true)
            .create(dir)
    }

    #[cfg(not(unix))]
    {
        std::fs::create_dir_all(dir)
    }
}

/// Truncates a string to a maximum length and adds an ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        // Find the nearest character boundary to avoid splitting multi-byte characters
        let end = s
            .char_indices()
            .map(|(idx, _)| idx)
            .take_while(|&idx| idx <= max_len.saturating_sub(3))
            .last()
            .unwrap_or(0);
        format!("{}...", &s[..end])
    }
}
