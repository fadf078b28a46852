//! Filesystem path utilities.
//!
//! This module resolves the per-user data directory used for the preference
//! file and log output, and expands tilde-prefixed paths from configuration
//! values.

use std::path::PathBuf;

/// Returns the data directory for Storyfetch state.
///
/// Resolves to the platform's local data directory (`~/.local/share/storyfetch`
/// on Linux) and falls back to the current directory when no home can be
/// determined. Both the preference file `preferences.json` and the log file
/// live within this directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("storyfetch")
}

/// Expands a leading tilde to the user's home directory.
///
/// Paths without a leading tilde are returned unchanged, as are tilde paths
/// when no home directory can be determined.
///
/// # Examples
///
/// ```
/// use storyfetch::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = dirs::home_dir() else {
        return path.to_string();
    };

    if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest).to_string_lossy().into_owned()
    } else if path == "~" {
        home.to_string_lossy().into_owned()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_ends_with_crate_name() {
        assert!(get_data_dir().ends_with("storyfetch"));
    }

    #[test]
    fn absolute_paths_are_unchanged() {
        assert_eq!(expand_tilde("/opt/data"), "/opt/data");
        assert_eq!(expand_tilde("relative/path"), "relative/path");
    }

    #[test]
    fn tilde_prefix_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            let expanded = expand_tilde("~/config.toml");
            assert!(expanded.starts_with(home.to_string_lossy().as_ref()));
            assert!(expanded.ends_with("config.toml"));
        }
    }
}
