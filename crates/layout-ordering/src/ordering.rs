//! Ordering reconciliation (pure functions, no I/O)
//!
//! Every mutation takes the current list by reference and returns a
//! [`Change`] holding the full replacement list. Only the destination group
//! of a move is renumbered; all other groups keep their entries, their
//! relative order and their `order` values.

use std::collections::HashMap;

use crate::error::{OrderingError, Result};
use crate::types::{Column, EntityType, GroupKey, NewItem, Placement, Section};

/// Item to relocate, identified by its current (column, section, id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Current column
    pub column: Column,
    /// Current section
    pub section: Section,
    /// Entity identifier
    pub id: String,
}

impl Source {
    /// Create a move source
    pub fn new(column: Column, section: Section, id: impl Into<String>) -> Self {
        Self {
            column,
            section,
            id: id.into(),
        }
    }
}

/// Drop target of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    /// Target column
    pub column: Column,
    /// Target section
    pub section: Section,
    /// 0-based insert position within the target group
    pub index: usize,
}

impl Destination {
    /// Create a move destination
    pub fn new(column: Column, section: Section, index: usize) -> Self {
        Self {
            column,
            section,
            index,
        }
    }
}

/// Result of a mutation: the replacement list plus the form-state flags the
/// host should apply alongside it
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    /// Full replacement ordering list
    pub ordering: Vec<Placement>,
    /// Host should mark its form state dirty
    pub dirty: bool,
    /// Host should re-run validation
    pub validate: bool,
}

/// Items of one (column, section) group, ascending by `order`
///
/// Ties keep their list order. Returns an empty vector for an empty list.
pub fn get_group(list: &[Placement], column: Column, section: Section) -> Vec<Placement> {
    let mut group: Vec<Placement> = list
        .iter()
        .filter(|item| item.in_group(column, section))
        .cloned()
        .collect();
    group.sort_by_key(|item| item.order);
    group
}

/// Relocate one item and renumber the destination group
///
/// The first entry matching `source` is removed and reinserted into the
/// destination group at `destination.index` (clamped to the group size).
/// The index counts positions in list order, not rank order; the two agree
/// whenever the stored list is already sorted by `order`.
/// The destination group is renumbered `1..=N` and appended after every
/// entry outside it; nothing outside the destination group is modified.
///
/// The moved entry keeps its stored `column` and `section`.
///
/// Ids are expected to be unique within a group; if they are not, the first
/// match in list order is moved.
///
/// # Errors
/// * `OrderingError::NotFound` - no entry matches the source triple; the
///   input list is left as it was
pub fn move_item(list: &[Placement], source: &Source, destination: &Destination) -> Result<Change> {
    // 1. Locate the source item
    let position = list
        .iter()
        .position(|item| item.matches(source.column, source.section, &source.id))
        .ok_or_else(|| OrderingError::NotFound {
            column: source.column,
            section: source.section,
            id: source.id.clone(),
        })?;

    // 2. Remove it from a working copy
    let mut working = list.to_vec();
    let moved = working.remove(position);

    // 3. Split off the destination group, keeping list order
    let (mut group, mut rest): (Vec<Placement>, Vec<Placement>) = working
        .into_iter()
        .partition(|item| item.in_group(destination.column, destination.section));

    // 4. Insert at the clamped index
    let index = destination.index.min(group.len());
    group.insert(index, moved);

    // 5. Renumber the destination group only
    renumber(&mut group);

    log::debug!(
        "moved {} from {}/{} to {}/{} at index {}",
        source.id,
        source.column,
        source.section,
        destination.column,
        destination.section,
        index
    );
    log::trace!(
        "destination group: {:?}",
        group.iter().map(|item| item.id.as_str()).collect::<Vec<_>>()
    );

    // 6. Untouched entries followed by the renumbered group
    rest.append(&mut group);

    Ok(Change {
        ordering: rest,
        dirty: true,
        validate: true,
    })
}

/// Append a whole category of items to one group
///
/// New placements get `sectionType` equal to `section` and orders counting
/// from 1 in the order given, even when the target group already has members.
/// Existing entries are not touched.
pub fn bulk_append(
    list: &[Placement],
    new_items: &[NewItem],
    column: Column,
    section: Section,
) -> Change {
    let mut ordering = list.to_vec();
    ordering.extend(new_items.iter().zip(1u32..).map(|(item, order)| Placement {
        column,
        section,
        section_type: Some(section),
        r#type: item.r#type.clone(),
        id: item.id.clone(),
        order,
        other: Default::default(),
    }));

    log::debug!(
        "appended {} items to {}/{}",
        new_items.len(),
        column,
        section
    );

    Change {
        ordering,
        dirty: true,
        validate: false,
    }
}

/// Remove every entry of one type across all groups
///
/// Remaining entries keep their `order` values; gaps are not repaired.
pub fn bulk_remove_by_type(list: &[Placement], r#type: &EntityType) -> Change {
    let ordering: Vec<Placement> = list
        .iter()
        .filter(|item| item.r#type != *r#type)
        .cloned()
        .collect();

    log::debug!(
        "removed {} {} entries",
        list.len() - ordering.len(),
        r#type
    );

    Change {
        ordering,
        dirty: true,
        validate: false,
    }
}

/// Distinct groups present in the list, in first-seen order
pub fn group_keys(list: &[Placement]) -> Vec<GroupKey> {
    let mut keys: Vec<GroupKey> = Vec::new();
    for item in list {
        let key = item.group();
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

/// Check that every group's `order` values are exactly `1..=N`
pub fn is_contiguous(list: &[Placement]) -> bool {
    let mut orders: HashMap<GroupKey, Vec<u32>> = HashMap::new();
    for item in list {
        orders.entry(item.group()).or_default().push(item.order);
    }
    orders.into_values().all(|mut values| {
        values.sort_unstable();
        values.iter().copied().eq(1..=values.len() as u32)
    })
}

fn renumber(group: &mut [Placement]) {
    for (item, order) in group.iter_mut().zip(1u32..) {
        item.order = order;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(column: Column, section: Section, id: &str, order: u32) -> Placement {
        Placement::new(column, section, EntityType::Products, id, order)
    }

    fn ids(group: &[Placement]) -> Vec<(&str, u32)> {
        group.iter().map(|p| (p.id.as_str(), p.order)).collect()
    }

    #[test]
    fn test_get_group_filters_and_sorts() {
        let list = vec![
            product(Column::ColumnTwo, Section::SectionOne, "b", 2),
            product(Column::ColumnOne, Section::SectionOne, "x", 1),
            product(Column::ColumnTwo, Section::SectionOne, "a", 1),
        ];
        let group = get_group(&list, Column::ColumnTwo, Section::SectionOne);
        assert_eq!(ids(&group), vec![("a", 1), ("b", 2)]);
    }

    #[test]
    fn test_get_group_empty_list() {
        assert!(get_group(&[], Column::ColumnOne, Section::SectionOne).is_empty());
    }

    #[test]
    fn test_move_same_group_scenario() {
        let list = vec![
            product(Column::ColumnTwo, Section::SectionOne, "p1", 1),
            product(Column::ColumnTwo, Section::SectionOne, "p2", 2),
        ];
        let change = move_item(
            &list,
            &Source::new(Column::ColumnTwo, Section::SectionOne, "p1"),
            &Destination::new(Column::ColumnTwo, Section::SectionOne, 1),
        )
        .expect("move should succeed");

        let group = get_group(&change.ordering, Column::ColumnTwo, Section::SectionOne);
        assert_eq!(ids(&group), vec![("p2", 1), ("p1", 2)]);
        assert!(change.dirty);
        assert!(change.validate);
    }

    #[test]
    fn test_move_missing_id_is_not_found() {
        let list = vec![product(Column::ColumnTwo, Section::SectionOne, "p1", 1)];
        let before = list.clone();
        let err = move_item(
            &list,
            &Source::new(Column::ColumnTwo, Section::SectionOne, "missing"),
            &Destination::new(Column::ColumnTwo, Section::SectionOne, 0),
        )
        .unwrap_err();

        assert_eq!(
            err,
            OrderingError::NotFound {
                column: Column::ColumnTwo,
                section: Section::SectionOne,
                id: "missing".to_string(),
            }
        );
        assert_eq!(list, before);
    }

    #[test]
    fn test_move_requires_matching_source_group() {
        // Right id, wrong section
        let list = vec![product(Column::ColumnTwo, Section::SectionOne, "p1", 1)];
        let result = move_item(
            &list,
            &Source::new(Column::ColumnTwo, Section::SuggestedTerms, "p1"),
            &Destination::new(Column::ColumnTwo, Section::SectionOne, 0),
        );
        assert!(matches!(result, Err(OrderingError::NotFound { .. })));
    }

    #[test]
    fn test_move_index_is_clamped() {
        let list = vec![
            product(Column::ColumnTwo, Section::SectionOne, "p1", 1),
            product(Column::ColumnTwo, Section::SectionOne, "p2", 2),
            product(Column::ColumnTwo, Section::SectionOne, "p3", 3),
        ];
        let change = move_item(
            &list,
            &Source::new(Column::ColumnTwo, Section::SectionOne, "p1"),
            &Destination::new(Column::ColumnTwo, Section::SectionOne, 99),
        )
        .expect("move should succeed");
        let group = get_group(&change.ordering, Column::ColumnTwo, Section::SectionOne);
        assert_eq!(ids(&group), vec![("p2", 1), ("p3", 2), ("p1", 3)]);
    }

    #[test]
    fn test_move_repairs_destination_numbering() {
        // Destination arrives with a gap and a duplicate; it leaves as 1..=N
        let list = vec![
            product(Column::ColumnTwo, Section::SectionOne, "a", 4),
            product(Column::ColumnTwo, Section::SectionOne, "b", 4),
            product(Column::ColumnTwo, Section::SectionOne, "c", 9),
        ];
        let change = move_item(
            &list,
            &Source::new(Column::ColumnTwo, Section::SectionOne, "c"),
            &Destination::new(Column::ColumnTwo, Section::SectionOne, 0),
        )
        .expect("move should succeed");
        assert!(is_contiguous(&change.ordering));
    }

    #[test]
    fn test_move_index_counts_list_positions() {
        // Stored out of rank order; index 1 means "after the first stored item"
        let list = vec![
            product(Column::ColumnTwo, Section::SectionOne, "c", 3),
            product(Column::ColumnTwo, Section::SectionOne, "a", 1),
            product(Column::ColumnTwo, Section::SectionOne, "b", 2),
            product(Column::ColumnOne, Section::SectionOne, "x", 1),
        ];
        let change = move_item(
            &list,
            &Source::new(Column::ColumnOne, Section::SectionOne, "x"),
            &Destination::new(Column::ColumnTwo, Section::SectionOne, 1),
        )
        .expect("move should succeed");
        assert_eq!(
            ids(&change.ordering),
            vec![("c", 1), ("x", 2), ("a", 3), ("b", 4)]
        );
    }

    #[test]
    fn test_move_to_front_renumbers_in_stored_order() {
        let list = vec![
            product(Column::ColumnTwo, Section::SectionOne, "c2", 2),
            product(Column::ColumnTwo, Section::SectionOne, "c1", 1),
            product(Column::ColumnTwo, Section::SectionOne, "c3", 3),
        ];
        let change = move_item(
            &list,
            &Source::new(Column::ColumnTwo, Section::SectionOne, "c3"),
            &Destination::new(Column::ColumnTwo, Section::SectionOne, 0),
        )
        .expect("move should succeed");
        assert_eq!(
            ids(&change.ordering),
            vec![("c3", 1), ("c2", 2), ("c1", 3)]
        );
    }

    #[test]
    fn test_bulk_append_numbers_from_one() {
        let list = vec![product(Column::ColumnOne, Section::SectionOne, "p1", 1)];
        let items = vec![
            NewItem::new(EntityType::SuggestedTerms, "t1"),
            NewItem::new(EntityType::SuggestedTerms, "t2"),
        ];
        let change = bulk_append(&list, &items, Column::ColumnTwo, Section::SuggestedTerms);

        assert_eq!(change.ordering.len(), 3);
        assert_eq!(change.ordering[0], list[0]);
        let appended = &change.ordering[1..];
        assert_eq!(ids(appended), vec![("t1", 1), ("t2", 2)]);
        assert!(appended
            .iter()
            .all(|p| p.section_type == Some(Section::SuggestedTerms)));
        assert!(change.dirty);
        assert!(!change.validate);
    }

    #[test]
    fn test_bulk_remove_leaves_gaps() {
        let list = vec![
            product(Column::ColumnTwo, Section::SectionOne, "p1", 1),
            Placement::new(
                Column::ColumnTwo,
                Section::SectionOne,
                EntityType::SuggestedTerms,
                "t1",
                2,
            ),
            product(Column::ColumnTwo, Section::SectionOne, "p3", 3),
        ];
        let change = bulk_remove_by_type(&list, &EntityType::SuggestedTerms);
        assert_eq!(ids(&change.ordering), vec![("p1", 1), ("p3", 3)]);
        assert!(!is_contiguous(&change.ordering));
    }

    #[test]
    fn test_group_keys_first_seen_order() {
        let list = vec![
            product(Column::ColumnTwo, Section::SectionOne, "a", 1),
            product(Column::ColumnOne, Section::SectionOne, "b", 1),
            product(Column::ColumnTwo, Section::SectionOne, "c", 2),
        ];
        assert_eq!(
            group_keys(&list),
            vec![
                GroupKey::new(Column::ColumnTwo, Section::SectionOne),
                GroupKey::new(Column::ColumnOne, Section::SectionOne),
            ]
        );
    }

    #[test]
    fn test_is_contiguous_allows_coinciding_orders_across_groups() {
        let list = vec![
            product(Column::ColumnOne, Section::SectionOne, "a", 1),
            product(Column::ColumnTwo, Section::SectionOne, "b", 1),
        ];
        assert!(is_contiguous(&list));
        assert!(is_contiguous(&[]));
    }
}
