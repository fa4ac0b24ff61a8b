//! Ordering reconciliation for search widget layouts
//!
//! This crate holds the logic behind the default/no-result layout editor:
//! a flat list of placements, grouped by (column, section), that is
//! reordered by drag-and-drop and bulk-edited by category toggles.
//!
//! All operations are pure. They take the current list by reference and
//! return the full replacement list; persisting it is up to the caller.
//!
//! # Examples
//!
//! ```
//! use layout_ordering::{
//!     get_group, move_item, Column, Destination, EntityType, Placement, Section, Source,
//! };
//!
//! let list = vec![
//!     Placement::new(Column::ColumnTwo, Section::SectionOne, EntityType::Products, "p1", 1),
//!     Placement::new(Column::ColumnTwo, Section::SectionOne, EntityType::Products, "p2", 2),
//! ];
//!
//! let change = move_item(
//!     &list,
//!     &Source::new(Column::ColumnTwo, Section::SectionOne, "p1"),
//!     &Destination::new(Column::ColumnTwo, Section::SectionOne, 1),
//! )?;
//!
//! let group = get_group(&change.ordering, Column::ColumnTwo, Section::SectionOne);
//! assert_eq!(group[0].id, "p2");
//! assert_eq!(group[1].order, 2);
//! # Ok::<(), layout_ordering::OrderingError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod geometry;
mod lookup;
mod ordering;
mod types;

// Re-export all public types
pub use error::{OrderingError, Result};
pub use geometry::{drop_index, DEFAULT_ROW_HEIGHT};
pub use lookup::{
    resolve_display_name, FieldData, Labeled, Lookup, SiteCollection, SiteData, SitePage,
    SiteProduct, SuggestedTerm,
};
pub use ordering::{
    bulk_append, bulk_remove_by_type, get_group, group_keys, is_contiguous, move_item, Change,
    Destination, Source,
};
pub use types::{Column, EntityType, GroupKey, NewItem, Placement, Section};
