//! Search widget layout editor
//!
//! Edits the default/no-result panel of an instant search widget: which
//! collections, products, pages and suggested terms appear in which column and
//! section, and in what order. The ordering rules live in the
//! [`layout_ordering`] crate; this crate adds the form document on disk, an
//! editing session over it, a terminal preview and the `swl` command line.
//!
//! # Example
//!
//! ```no_run
//! use search_widget_layout::{Editor, FormStore, LayoutMode};
//! use search_widget_layout::form::load_site_data;
//! use layout_ordering::{Column, Destination, Section, Source, DEFAULT_ROW_HEIGHT};
//! use std::path::Path;
//!
//! let form_path = Path::new("form.json");
//! let form = FormStore::load(form_path)?;
//! let site = load_site_data(Path::new("site.json"))?;
//!
//! let mut editor = Editor::new(form, site, DEFAULT_ROW_HEIGHT);
//! editor.move_to(
//!     &Source::new(Column::ColumnTwo, Section::SectionOne, "p2"),
//!     Destination::new(Column::ColumnTwo, Section::SectionOne, 0),
//! )?;
//! editor.set_layout(LayoutMode::OneColumn);
//!
//! if editor.is_dirty() {
//!     FormStore::save(form_path, &editor.into_form())?;
//! }
//! # Ok::<(), search_widget_layout::Error>(())
//! ```

#![warn(missing_docs)]

/// Configuration file handling.
pub mod config;
/// Editing session over one form document.
pub mod editor;
/// Error types.
pub mod error;
/// Form document and site data files.
pub mod form;
/// Tracing subscriber setup.
pub mod logging;
/// Terminal preview rendering.
pub mod preview;

#[cfg(test)]
pub(crate) mod test_utils;

pub use editor::{Editor, EditorItem, SUGGESTED_TERMS_GROUP};
pub use error::{Error, FormError, Result};
pub use form::{FormDocument, FormStore, LayoutMode, WidgetCustomization};
pub use preview::{format_name, render_to_lines, Preview};
