//! # Product Table Component
//!
//! The paginated product grid: selection markers, sortable column headers
//! with direction indicators, stock badges, and a row cursor.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ProductTableState` (row cursor) lives in `TuiState`
//! - `ProductTable` is created each frame with the current page as props
//!
//! The rows handed in are already the derived page — this component never
//! filters or sorts anything itself.

use std::collections::HashSet;

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, TableState};

use crate::core::product::Product;
use crate::core::state::{SortDirection, SortField, Sorting};
use crate::tui::component::Component;
use crate::tui::format::{format_currency, format_date, truncate_str};

/// Persistent state: which row the cursor is on.
pub struct ProductTableState {
    pub cursor: usize,
    pub table_state: TableState,
}

impl ProductTableState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            table_state: TableState::default(),
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, row_count: usize) {
        if row_count > 0 {
            self.cursor = (self.cursor + 1).min(row_count - 1);
        }
    }

    /// Keep the cursor inside the current page. Rows shrink under the cursor
    /// whenever a delete or filter lands, so this runs every frame.
    pub fn clamp(&mut self, row_count: usize) {
        if row_count == 0 {
            self.cursor = 0;
            self.table_state.select(None);
        } else {
            self.cursor = self.cursor.min(row_count - 1);
            self.table_state.select(Some(self.cursor));
        }
    }
}

impl Default for ProductTableState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the product grid.
pub struct ProductTable<'a> {
    state: &'a mut ProductTableState,
    rows: &'a [&'a Product],
    selected: &'a HashSet<String>,
    sorting: &'a Sorting,
    low_stock_threshold: u32,
}

impl<'a> ProductTable<'a> {
    pub fn new(
        state: &'a mut ProductTableState,
        rows: &'a [&'a Product],
        selected: &'a HashSet<String>,
        sorting: &'a Sorting,
        low_stock_threshold: u32,
    ) -> Self {
        Self {
            state,
            rows,
            selected,
            sorting,
            low_stock_threshold,
        }
    }

    fn header_row(&self) -> Row<'static> {
        let columns = [
            ("", None),
            ("Name", Some(SortField::Name)),
            ("Category", Some(SortField::Category)),
            ("Price", Some(SortField::Price)),
            ("Stock", Some(SortField::Stock)),
            ("Updated", Some(SortField::UpdatedAt)),
        ];
        let cells: Vec<Cell> = columns
            .iter()
            .map(|(title, field)| {
                let text = match field {
                    Some(field) => format!("{} {}", title, sort_indicator(self.sorting, *field)),
                    None => (*title).to_string(),
                };
                Cell::from(text)
            })
            .collect();
        Row::new(cells).style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )
    }

    fn stock_cell(&self, product: &Product) -> Cell<'static> {
        if product.stock == 0 {
            Cell::from(Span::styled(
                "out of stock",
                Style::default().fg(Color::Red),
            ))
        } else if product.stock <= self.low_stock_threshold {
            Cell::from(Span::styled(
                format!("low: {}", product.stock),
                Style::default().fg(Color::Yellow),
            ))
        } else {
            Cell::from(Span::styled(
                product.stock.to_string(),
                Style::default().fg(Color::Green),
            ))
        }
    }
}

impl Component for ProductTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Products ")
            .border_style(Style::default().fg(Color::DarkGray));

        if self.rows.is_empty() {
            self.state.clamp(0);
            let empty = Paragraph::new("No products found")
                .style(Style::default().fg(Color::DarkGray))
                .centered()
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.clamp(self.rows.len());

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|product| {
                let is_selected = self.selected.contains(&product.id);
                let marker = if is_selected { "[x]" } else { "[ ]" };
                let row = Row::new(vec![
                    Cell::from(marker),
                    Cell::from(truncate_str(&product.name, 30)),
                    Cell::from(product.category.label()),
                    Cell::from(format_currency(product.price)),
                    self.stock_cell(product),
                    Cell::from(format_date(&product.updated_at)),
                ]);
                if is_selected {
                    row.style(Style::default().bg(Color::DarkGray))
                } else {
                    row
                }
            })
            .collect();

        let widths = [
            Constraint::Length(3),
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(13),
        ];

        let table = Table::new(rows, widths)
            .header(self.header_row())
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .column_spacing(1);

        frame.render_stateful_widget(table, area, &mut self.state.table_state);
    }
}

/// `↕` unsorted, `↑`/`↓` for the active sort column.
fn sort_indicator(sorting: &Sorting, field: SortField) -> &'static str {
    if sorting.field != Some(field) {
        return "↕";
    }
    match sorting.direction {
        SortDirection::Asc => "↑",
        SortDirection::Desc => "↓",
    }
}
