//! Display-name resolution against the site lookup datasets
//!
//! Each placement type selects exactly one dataset. Selection is an
//! exhaustive match over [`Lookup`], and each record type knows which of its
//! fields is the label.

use serde::{Deserialize, Serialize};

use crate::types::{EntityType, Placement};

/// Store collection record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteCollection {
    /// Entity identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Collection label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Nested product attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldData {
    /// Product label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Store product record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteProduct {
    /// Entity identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Product attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_data: Option<FieldData>,
}

/// Content page record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitePage {
    /// Entity identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Page label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Suggested search term record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedTerm {
    /// Entity identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// The term itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
}

/// A lookup record with an identifier and a type-specific label
pub trait Labeled {
    /// Record identifier
    fn id(&self) -> &str;

    /// Human-readable label, if the record carries one
    fn label(&self) -> Option<&str>;
}

impl Labeled for SiteCollection {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

impl Labeled for SiteProduct {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> Option<&str> {
        self.field_data.as_ref()?.name.as_deref()
    }
}

impl Labeled for SitePage {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl Labeled for SuggestedTerm {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> Option<&str> {
        self.term.as_deref()
    }
}

/// The four read-only lookup datasets supplied by the host
///
/// Any dataset may be absent; lookups into an absent dataset resolve to
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteData {
    /// Collections dataset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_collections: Option<Vec<SiteCollection>>,
    /// Products dataset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_products: Option<Vec<SiteProduct>>,
    /// Pages dataset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_pages: Option<Vec<SitePage>>,
    /// Suggested terms dataset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_suggested_terms: Option<Vec<SuggestedTerm>>,
}

impl SiteData {
    /// Select the dataset for an entity type
    ///
    /// Returns `None` for unrecognized types and for absent datasets.
    pub fn lookup(&self, r#type: &EntityType) -> Option<Lookup<'_>> {
        match r#type {
            EntityType::Collections => self.site_collections.as_deref().map(Lookup::Collections),
            EntityType::Products => self.site_products.as_deref().map(Lookup::Products),
            EntityType::Pages => self.site_pages.as_deref().map(Lookup::Pages),
            EntityType::SuggestedTerms => {
                self.user_suggested_terms.as_deref().map(Lookup::SuggestedTerms)
            }
            EntityType::Other(_) => None,
        }
    }

    /// Suggested terms, or an empty slice when the dataset is absent
    pub fn suggested_terms(&self) -> &[SuggestedTerm] {
        self.user_suggested_terms.as_deref().unwrap_or_default()
    }
}

/// One selected dataset
#[derive(Debug, Clone, Copy)]
pub enum Lookup<'a> {
    /// Collections dataset
    Collections(&'a [SiteCollection]),
    /// Products dataset
    Products(&'a [SiteProduct]),
    /// Pages dataset
    Pages(&'a [SitePage]),
    /// Suggested terms dataset
    SuggestedTerms(&'a [SuggestedTerm]),
}

impl<'a> Lookup<'a> {
    /// Label of the first record whose identifier equals `id`
    ///
    /// Empty labels count as missing.
    pub fn label(&self, id: &str) -> Option<&'a str> {
        match *self {
            Lookup::Collections(records) => find_label(records, id),
            Lookup::Products(records) => find_label(records, id),
            Lookup::Pages(records) => find_label(records, id),
            Lookup::SuggestedTerms(records) => find_label(records, id),
        }
    }
}

fn find_label<'a, T: Labeled>(records: &'a [T], id: &str) -> Option<&'a str> {
    records
        .iter()
        .find(|record| record.id() == id)?
        .label()
        .filter(|label| !label.is_empty())
}

/// Resolve the human-readable label for a placement
///
/// Returns `None` if the type is unrecognized, the dataset is absent, no
/// record matches the id, or the record has no label. Callers render nothing
/// in that case.
pub fn resolve_display_name<'a>(placement: &Placement, datasets: &'a SiteData) -> Option<&'a str> {
    datasets.lookup(&placement.r#type)?.label(&placement.id)
}
