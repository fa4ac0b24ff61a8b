//! Config file location.
//!
//! `$XDG_CONFIG_HOME/search-widget-layout/config.toml` when the variable is set
//! and non-empty, otherwise the platform config directory from `dirs`
//! (`~/.config` on Linux, `~/Library/Application Support` on macOS).

use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "search-widget-layout";
const CONFIG_FILE: &str = "config.toml";

/// Directory holding the config file.
pub fn config_dir() -> PathBuf {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(platform_config_dir);
    base.join(APP_NAME)
}

/// Platform config base, or the working directory when no home is known.
fn platform_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Full path of the config file.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// `create_dir_all`, then restrict the leaf to the owner (0700) on Unix.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}

/// Create the config directory if needed and return it.
pub fn ensure_config_dir() -> std::io::Result<PathBuf> {
    let dir = config_dir();
    ensure_dir(&dir)?;
    Ok(dir)
}
