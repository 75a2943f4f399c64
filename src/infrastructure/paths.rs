//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which
//! points at the cwd of the last focused terminal (usually the user's home
//! directory). Paths from the plugin configuration are written as the user
//! sees them on the host and are mapped here.

use std::path::PathBuf;

const HOST_ROOT: &str = "/host";

/// Returns the data directory for trace output.
///
/// Resolves to `~/.local/share/zellij/concierge` on the host.
///
/// ```
/// use concierge::infrastructure::data_dir;
///
/// assert_eq!(data_dir().to_str(), Some("/host/.local/share/zellij/concierge"));
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij").join("concierge")
}

/// Expands a leading `~` to the `/host` mount.
///
/// ```
/// use concierge::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/concierge.toml"), "/etc/concierge.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

/// Resolves a configured file path to a sandbox path.
///
/// Tilde paths are expanded; relative paths are taken relative to `/host`.
#[must_use]
pub fn resolve_config_path(path: &str) -> PathBuf {
    let expanded = expand_tilde(path.trim());
    let candidate = PathBuf::from(&expanded);

    if candidate.is_absolute() {
        candidate
    } else {
        PathBuf::from(HOST_ROOT).join(candidate)
    }
}

/// Removes the `/host` prefix so a path reads as it does on the host.
#[must_use]
pub fn strip_host_prefix(path: &str) -> &str {
    match path.strip_prefix(HOST_ROOT) {
        Some("") => "~",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}
