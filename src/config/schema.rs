//! TOML configuration schema types for the layout editor.
//!
//! All structs derive `Deserialize` and `Serialize` with sensible defaults via
//! `#[serde(default)]`, so a partial file only overrides what it names.

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::form::LayoutMode;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// Corresponds to the full TOML file structure:
/// ```toml
/// [editor]
/// [log]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Layout editor behavior.
    pub editor: EditorConfig,
    /// Logging settings.
    pub log: LogConfig,
}

// ---------------------------------------------------------------------------
// Editor
// ---------------------------------------------------------------------------

/// Layout editor configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    /// Height of one item row in pixels, used to turn a drop position into
    /// an insert index.
    pub row_height: u32,
    /// Layout assigned to form documents that do not name one.
    #[serde(deserialize_with = "known_layout")]
    pub default_layout: LayoutMode,
    /// Width of the rendered preview in terminal columns.
    pub preview_width: u16,
}

/// Config names a layout the editor offers; forms may carry any.
fn known_layout<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LayoutMode, D::Error> {
    let name = String::deserialize(deserializer)?;
    LayoutMode::known(&name)
        .ok_or_else(|| de::Error::custom(format!("unknown layout '{}'", name)))
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            row_height: 50,
            default_layout: LayoutMode::TwoColumn,
            preview_width: 80,
        }
    }
}

// ---------------------------------------------------------------------------
// Log
// ---------------------------------------------------------------------------

/// Logging configuration. `SWL_LOG` overrides `level` when set.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Logging verbosity.
    pub level: LogLevel,
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings (default).
    #[default]
    Warn,
    /// Informational messages.
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
