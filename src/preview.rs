//! Terminal preview of the default/no-result panel.
//!
//! Columns are drawn side by side, bordered, with one heading per section and
//! one row per placement. `columnOne` only ever shows `sectionOne`, and when
//! that section has items it collapses to a single "All Products" row.

use layout_ordering::{Column, Section};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::editor::Editor;
use crate::form::LayoutMode;

/// Row marker drawn in front of every item.
pub const ITEM_MARKER: &str = "⠿";

/// Row shown instead of the items of `columnOne/sectionOne`.
pub const ALL_PRODUCTS: &str = "All Products";

/// Sections shown for `column`, top to bottom.
pub fn visible_sections(column: Column) -> &'static [Section] {
    match column {
        Column::ColumnOne => &[Section::SectionOne],
        Column::ColumnTwo => &[Section::SuggestedTerms, Section::SectionOne],
    }
}

/// Whether `(column, section)` renders as the "All Products" placeholder.
fn is_placeholder(column: Column, section: Section) -> bool {
    column == Column::ColumnOne && section == Section::SectionOne
}

/// Turn a camelCase identifier into a heading (`columnOne` -> `Column One`).
pub fn format_name(name: &str) -> String {
    let mut spaced = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    let mut chars = spaced.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    capitalized.trim().to_string()
}

/// Preview widget over an editor session.
pub struct Preview<'a> {
    editor: &'a Editor,
    default_layout: LayoutMode,
}

impl<'a> Preview<'a> {
    /// Preview `editor`, showing `default_layout` when the form names none.
    pub fn new(editor: &'a Editor, default_layout: LayoutMode) -> Self {
        Self {
            editor,
            default_layout,
        }
    }

    fn column_lines(&self, column: Column) -> Vec<Line<'static>> {
        let heading = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = Vec::new();

        for &section in visible_sections(column) {
            lines.push(Line::from(Span::styled(
                format_name(section.as_str()),
                heading,
            )));

            let items = self.editor.items(column, section);
            if is_placeholder(column, section) && !items.is_empty() {
                lines.push(Line::from(format!("{} {}", ITEM_MARKER, ALL_PRODUCTS)));
                continue;
            }
            for item in items {
                let label = item.label.unwrap_or_default();
                lines.push(Line::from(format!("{} {}", ITEM_MARKER, label)));
            }
        }
        lines
    }

    fn status_line(&self) -> Line<'static> {
        let layout = self.editor.layout_or(&self.default_layout);
        let terms = if self.editor.suggested_terms_enabled() {
            "on"
        } else {
            "off"
        };
        Line::from(format!(
            "Layout: {}  Suggested terms: {}",
            layout.as_str(),
            terms
        ))
    }

    /// Rows needed to draw every item without clipping.
    pub fn height(&self) -> u16 {
        let tallest = Column::ALL
            .iter()
            .map(|&column| self.column_lines(column).len())
            .max()
            .unwrap_or(0);
        // status line plus top and bottom borders
        u16::try_from(tallest + 3).unwrap_or(u16::MAX)
    }
}

impl Widget for Preview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [status_area, columns_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        self.status_line().render(status_area, buf);

        let column_areas =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(columns_area);

        for (&column, &column_area) in Column::ALL.iter().zip(column_areas.iter()) {
            let block = Block::bordered().title(format_name(column.as_str()));
            Paragraph::new(self.column_lines(column))
                .block(block)
                .render(column_area, buf);
        }
    }
}

/// Render the preview off-screen and return its rows as text.
///
/// Trailing spaces are trimmed from each row. A `height` of 0 uses
/// [`Preview::height`].
pub fn render_to_lines(
    editor: &Editor,
    default_layout: LayoutMode,
    width: u16,
    height: u16,
) -> Vec<String> {
    let preview = Preview::new(editor, default_layout);
    let height = if height == 0 { preview.height() } else { height };
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    preview.render(area, &mut buf);

    (0..area.height)
        .map(|row| {
            let text: String = (0..area.width)
                .map(|col| buf.cell((col, row)).map(|cell| cell.symbol()).unwrap_or(" "))
                .collect();
            text.trim_end().to_string()
        })
        .collect()
}
