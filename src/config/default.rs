//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()`
//! and functions to write it to the XDG config path or an explicit one.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Search Widget Layout Editor Configuration
#
# All values shown below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/search-widget-layout/config.toml

# ==============================================================================
# Editor
# ==============================================================================

[editor]

# Height of one item row in pixels. A drop at pointer offset y inside a
# section lands at index floor(y / row_height), clamped to the section size.
row_height = 50

# Layout given to form documents that do not specify one.
# Options: "two-column", "one-column", "suggested-search-terms"
default_layout = "two-column"

# Width of the `swl show` preview in terminal columns.
preview_width = 80

# ==============================================================================
# Logging
# ==============================================================================

[log]

# Logging verbosity: "error", "warn", "info", "debug", "trace".
# The SWL_LOG environment variable takes precedence when set.
level = "warn"
"#;

// ---------------------------------------------------------------------------
// File creation
// ---------------------------------------------------------------------------

/// Creates (or force-overwrites) the default config file.
///
/// Writes to `path` when given, otherwise to the XDG config path.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config(path: Option<&Path>, force: bool) -> Result<PathBuf, ConfigError> {
    let path = path.map_or_else(xdg::config_path, Path::to_path_buf);

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(&path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(&path)?;
    Ok(path)
}

/// Writes the default template to `path`, creating parent dirs.
///
/// Only the XDG directory gets owner-only permissions; a parent named on the
/// command line is created as is.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let created = if path == xdg::config_path() {
        xdg::ensure_config_dir().map(|_| ())
    } else {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
            _ => Ok(()),
        }
    };
    created.map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
