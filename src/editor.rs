//! Layout editor state and event handling.
//!
//! The editor owns the in-memory form for one editing session. Every user
//! event (drop, toggle, layout choice) is turned into one reconciler call and
//! the returned [`Change`] is applied explicitly: the ordering list is
//! replaced and the dirty/validation flags are raised as the change asks.

use layout_ordering::{
    bulk_append, bulk_remove_by_type, drop_index, get_group, move_item, resolve_display_name,
    Change, Column, Destination, EntityType, NewItem, OrderingError, Placement, Section, SiteData,
    Source,
};

use crate::form::{FormDocument, LayoutMode};

/// Target group for suggested terms switched on by the toggle.
pub const SUGGESTED_TERMS_GROUP: (Column, Section) = (Column::ColumnTwo, Section::SuggestedTerms);

/// One rendered row: a placement and its resolved label.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorItem {
    /// The placement record
    pub placement: Placement,
    /// Display label, `None` when the lookup has nothing for it
    pub label: Option<String>,
}

/// In-memory editing session over one form document.
#[derive(Debug, Clone)]
pub struct Editor {
    form: FormDocument,
    site_data: SiteData,
    row_height: f64,
    dirty: bool,
    validation_requested: bool,
}

impl Editor {
    /// Start editing `form` with `site_data` for label lookups.
    ///
    /// `row_height` is the pixel height of one item row used by [`drop_at`](Self::drop_at).
    pub fn new(form: FormDocument, site_data: SiteData, row_height: f64) -> Self {
        Self {
            form,
            site_data,
            row_height,
            dirty: false,
            validation_requested: false,
        }
    }

    /// Current flat ordering list.
    pub fn ordering(&self) -> &[Placement] {
        &self
            .form
            .instant_search_widget_customization
            .default_or_no_result_ordering
    }

    /// Lookup datasets.
    pub fn site_data(&self) -> &SiteData {
        &self.site_data
    }

    /// Selected layout, falling back to `default` when the form has none.
    pub fn layout_or<'a>(&'a self, default: &'a LayoutMode) -> &'a LayoutMode {
        self.form
            .instant_search_widget_customization
            .default_or_no_result_layout
            .as_ref()
            .unwrap_or(default)
    }

    /// Whether suggested terms are switched on.
    pub fn suggested_terms_enabled(&self) -> bool {
        self.form.instant_search_widget_customization.suggested_search_terms
    }

    /// True once any event changed the form.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// True once an event asked for the form to be re-validated.
    pub fn validation_requested(&self) -> bool {
        self.validation_requested
    }

    /// Items of one group in display order, with labels resolved.
    pub fn items(&self, column: Column, section: Section) -> Vec<EditorItem> {
        get_group(self.ordering(), column, section)
            .into_iter()
            .map(|placement| {
                let label = resolve_display_name(&placement, &self.site_data).map(str::to_string);
                EditorItem { placement, label }
            })
            .collect()
    }

    /// Handle a drop at pointer height `pointer_y` over the section whose
    /// top edge is at `container_top`.
    ///
    /// The insert index is computed against the destination group as it is
    /// displayed right now. Returns the index used.
    ///
    /// # Errors
    /// * `OrderingError::NotFound` - see [`move_to`](Self::move_to)
    pub fn drop_at(
        &mut self,
        source: &Source,
        column: Column,
        section: Section,
        pointer_y: f64,
        container_top: f64,
    ) -> Result<usize, OrderingError> {
        let size = get_group(self.ordering(), column, section).len();
        let index = drop_index(pointer_y, container_top, self.row_height, size);
        self.move_to(source, Destination::new(column, section, index))?;
        Ok(index)
    }

    /// Move one item to `destination`.
    ///
    /// # Errors
    /// * `OrderingError::NotFound` - the source item is not in the list; the
    ///   form is left unchanged
    pub fn move_to(&mut self, source: &Source, destination: Destination) -> Result<(), OrderingError> {
        match move_item(self.ordering(), source, &destination) {
            Ok(change) => {
                self.apply(change);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Drop ignored: {}", e);
                Err(e)
            }
        }
    }

    /// Switch suggested search terms on or off.
    ///
    /// Switching on appends every known suggested term to the suggested terms
    /// group, numbered from 1. Switching off removes every suggested-term
    /// placement from every group.
    pub fn set_suggested_terms(&mut self, enabled: bool) {
        self.form.instant_search_widget_customization.suggested_search_terms = enabled;

        let change = if enabled {
            let items: Vec<NewItem> = self
                .site_data
                .suggested_terms()
                .iter()
                .map(|term| NewItem::new(EntityType::SuggestedTerms, term.id.clone()))
                .collect();
            let (column, section) = SUGGESTED_TERMS_GROUP;
            bulk_append(self.ordering(), &items, column, section)
        } else {
            bulk_remove_by_type(self.ordering(), &EntityType::SuggestedTerms)
        };

        tracing::info!(
            "Suggested terms {}: {} placements",
            if enabled { "enabled" } else { "disabled" },
            change.ordering.len()
        );
        self.apply(change);
    }

    /// Choose the panel layout.
    pub fn set_layout(&mut self, mode: LayoutMode) {
        tracing::info!("Layout set to {}", mode.as_str());
        self.form.instant_search_widget_customization.default_or_no_result_layout = Some(mode);
        self.dirty = true;
        self.validation_requested = true;
    }

    /// Finish editing and hand back the form.
    pub fn into_form(self) -> FormDocument {
        self.form
    }

    fn apply(&mut self, change: Change) {
        self.form
            .instant_search_widget_customization
            .default_or_no_result_ordering = change.ordering;
        self.dirty |= change.dirty;
        self.validation_requested |= change.validate;
    }
}
