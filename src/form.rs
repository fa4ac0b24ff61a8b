//! Form document and site data files
//!
//! The editor form is stored as one JSON document and always replaced
//! wholesale. Fields this crate does not know about are carried through a
//! load/save cycle untouched.

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::FormError;
use layout_ordering::{Placement, SiteData};

/// Layout of the default/no-result panel
///
/// Identifiers this editor does not offer are kept in [`LayoutMode::Other`]
/// so a form written by a newer editor still loads and saves unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LayoutMode {
    /// Two columns side by side
    #[default]
    TwoColumn,
    /// Single column
    OneColumn,
    /// Most popular searches used as the suggested terms
    SuggestedSearchTerms,
    /// Any other identifier, preserved as-is
    Other(String),
}

impl LayoutMode {
    /// Every layout, in the order the editor offers them
    pub const ALL: [LayoutMode; 3] = [
        LayoutMode::TwoColumn,
        LayoutMode::OneColumn,
        LayoutMode::SuggestedSearchTerms,
    ];

    /// Serialized identifier (e.g. `two-column`)
    pub fn as_str(&self) -> &str {
        match self {
            LayoutMode::TwoColumn => "two-column",
            LayoutMode::OneColumn => "one-column",
            LayoutMode::SuggestedSearchTerms => "suggested-search-terms",
            LayoutMode::Other(name) => name,
        }
    }

    /// One of [`LayoutMode::ALL`] by identifier, `None` for anything else
    pub fn known(name: &str) -> Option<LayoutMode> {
        LayoutMode::ALL.into_iter().find(|mode| mode.as_str() == name)
    }
}

impl From<String> for LayoutMode {
    fn from(name: String) -> Self {
        LayoutMode::known(&name).unwrap_or(LayoutMode::Other(name))
    }
}

impl From<LayoutMode> for String {
    fn from(mode: LayoutMode) -> Self {
        match mode {
            LayoutMode::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// Instant search widget settings edited by the layout editor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetCustomization {
    /// Flat placement list for the default/no-result panel
    #[serde(default)]
    pub default_or_no_result_ordering: Vec<Placement>,
    /// Selected layout, if one was ever chosen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_or_no_result_layout: Option<LayoutMode>,
    /// Whether suggested search terms are shown
    #[serde(default)]
    pub suggested_search_terms: bool,
    /// Fields owned by other editors
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// The persisted form document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDocument {
    /// Instant search widget section
    #[serde(default)]
    pub instant_search_widget_customization: WidgetCustomization,
    /// Sections owned by other editors
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Reads and atomically replaces form documents on disk
pub struct FormStore;

impl FormStore {
    /// Read a form document
    ///
    /// Returns the default (empty) document if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// - `FormError::Read` if the file exists but cannot be read
    /// - `FormError::Parse` if the content is not a valid form document
    pub fn load(path: &Path) -> Result<FormDocument, FormError> {
        if !path.exists() {
            tracing::debug!("No form at {}, starting empty", path.display());
            return Ok(FormDocument::default());
        }
        read_json(path)
    }

    /// Replace the form document at `path`
    ///
    /// Writes to a timestamped temp file next to the target, fsyncs it, then
    /// renames it over the target. The temp file is removed if a step fails.
    ///
    /// # Errors
    ///
    /// - `FormError::Serialize` if the document cannot be serialized
    /// - `FormError::WriteAtomic` if any write step fails
    pub fn save(path: &Path, form: &FormDocument) -> Result<(), FormError> {
        let json = serde_json::to_string_pretty(form).map_err(FormError::Serialize)?;

        let write_error = |message: String| FormError::WriteAtomic {
            path: path.to_path_buf(),
            message,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| write_error(format!("Failed to create directory: {}", e)))?;
        }

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| write_error("Path has no file name".to_string()))?;
        let timestamp = Local::now().format("%Y%m%d-%H%M%S").to_string();
        let temp_path = path.with_file_name(format!("{}.tmp.{}", file_name, timestamp));

        if let Err(message) = commit(&temp_path, path, &json) {
            if let Err(e) = fs::remove_file(&temp_path) {
                tracing::debug!("Could not remove {}: {}", temp_path.display(), e);
            }
            return Err(write_error(message));
        }

        tracing::info!("Saved form to {}", path.display());
        Ok(())
    }
}

/// Write `json` to `temp_path`, fsync it and rename it over `path`.
fn commit(temp_path: &Path, path: &Path, json: &str) -> Result<(), String> {
    fs::write(temp_path, json).map_err(|e| format!("Failed to write temp file: {}", e))?;

    let file = fs::File::open(temp_path)
        .map_err(|e| format!("Failed to open temp file for fsync: {}", e))?;
    file.sync_all()
        .map_err(|e| format!("Failed to fsync: {}", e))?;

    fs::rename(temp_path, path).map_err(|e| {
        format!(
            "Failed to rename {} to {}: {}",
            temp_path.display(),
            path.display(),
            e
        )
    })
}

/// Read the lookup datasets from a JSON file
///
/// # Errors
///
/// - `FormError::Read` if the file cannot be read (including when missing)
/// - `FormError::Parse` if the content is not valid site data
pub fn load_site_data(path: &Path) -> Result<SiteData, FormError> {
    read_json(path)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, FormError> {
    let content = fs::read_to_string(path).map_err(|source| FormError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| FormError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
