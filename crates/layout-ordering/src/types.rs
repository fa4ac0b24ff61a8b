//! Core domain types for layout-ordering
//!
//! This module defines the records that make up a default/no-result layout:
//! Column, Section, EntityType, Placement and the GroupKey that identifies a
//! (column, section) group.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Layout column
///
/// Matches the original column identifiers exactly when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    /// Left column
    ColumnOne,
    /// Right column
    ColumnTwo,
}

impl Column {
    /// All columns in display order
    pub const ALL: [Column; 2] = [Column::ColumnOne, Column::ColumnTwo];

    /// Serialized identifier (e.g. `columnOne`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::ColumnOne => "columnOne",
            Column::ColumnTwo => "columnTwo",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section within a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    /// Suggested search terms block
    SuggestedTerms,
    /// Main content block
    SectionOne,
}

impl Section {
    /// All sections in display order
    pub const ALL: [Section; 2] = [Section::SuggestedTerms, Section::SectionOne];

    /// Serialized identifier (e.g. `sectionOne`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::SuggestedTerms => "suggestedTerms",
            Section::SectionOne => "sectionOne",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data category of the entity a placement refers to
///
/// Serialized as the bare string used by the backing store. Unrecognized
/// strings are kept verbatim in [`EntityType::Other`] so that a load/save
/// cycle never rewrites foreign data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityType {
    /// Store collections
    Collections,
    /// Store products
    Products,
    /// Content pages
    Pages,
    /// User suggested search terms
    SuggestedTerms,
    /// Any other tag, preserved as-is
    Other(String),
}

impl EntityType {
    /// Serialized tag (e.g. `suggestedTerms`)
    pub fn as_str(&self) -> &str {
        match self {
            EntityType::Collections => "Collections",
            EntityType::Products => "Products",
            EntityType::Pages => "Pages",
            EntityType::SuggestedTerms => "suggestedTerms",
            EntityType::Other(tag) => tag,
        }
    }
}

impl From<String> for EntityType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Collections" => EntityType::Collections,
            "Products" => EntityType::Products,
            "Pages" => EntityType::Pages,
            "suggestedTerms" => EntityType::SuggestedTerms,
            _ => EntityType::Other(tag),
        }
    }
}

impl From<&str> for EntityType {
    fn from(tag: &str) -> Self {
        EntityType::from(tag.to_string())
    }
}

impl From<EntityType> for String {
    fn from(ty: EntityType) -> Self {
        match ty {
            EntityType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the flat ordering list
///
/// Field order matches the records written by the backing store:
/// `column`, `section`, `sectionType` (only when present), `type`, `id`,
/// `order`, followed by any fields this crate does not model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Column holding the entry
    pub column: Column,
    /// Section within the column
    pub section: Section,
    /// Section kind, written by bulk insertion
    #[serde(
        rename = "sectionType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub section_type: Option<Section>,
    /// Data category of the referenced entity
    #[serde(rename = "type")]
    pub r#type: EntityType,
    /// Foreign key into the dataset named by `type`
    pub id: String,
    /// 1-based rank within the (column, section) group
    pub order: u32,
    /// Fields written by other tools, carried through untouched
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Placement {
    /// Build a placement without a section type
    pub fn new(
        column: Column,
        section: Section,
        r#type: EntityType,
        id: impl Into<String>,
        order: u32,
    ) -> Self {
        Self {
            column,
            section,
            section_type: None,
            r#type,
            id: id.into(),
            order,
            other: Map::new(),
        }
    }

    /// Group this placement belongs to
    pub fn group(&self) -> GroupKey {
        GroupKey::new(self.column, self.section)
    }

    /// Check whether this placement belongs to the given group
    pub fn in_group(&self, column: Column, section: Section) -> bool {
        self.column == column && self.section == section
    }

    /// Check if this placement matches the (column, section, id) triple
    pub fn matches(&self, column: Column, section: Section, id: &str) -> bool {
        self.in_group(column, section) && self.id == id
    }
}

/// Identity of a (column, section) group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupKey {
    /// Column
    pub column: Column,
    /// Section
    pub section: Section,
}

impl GroupKey {
    /// Create a group key
    pub fn new(column: Column, section: Section) -> Self {
        Self { column, section }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.column, self.section)
    }
}

/// Entity queued for bulk insertion (type + id, no position yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    /// Data category
    pub r#type: EntityType,
    /// Entity identifier
    pub id: String,
}

impl NewItem {
    /// Create a new item
    pub fn new(r#type: EntityType, id: impl Into<String>) -> Self {
        Self {
            r#type,
            id: id.into(),
        }
    }
}
