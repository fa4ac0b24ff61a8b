//! Error types for layout-ordering
//!
//! The reconciler has exactly one failure mode: the item a move refers to is
//! not in the list. An unresolvable display name is not an error and is
//! modelled as `Option::None` instead.

use thiserror::Error;

use crate::types::{Column, Section};

/// Reconciliation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingError {
    /// Source item not present in the ordering list
    #[error("Item not found in the source column/section: {column}/{section} - {id}")]
    NotFound {
        /// Source column
        column: Column,
        /// Source section
        section: Section,
        /// Identifier that was looked up
        id: String,
    },
}

/// Result type alias for layout-ordering operations
pub type Result<T> = std::result::Result<T, OrderingError>;
