//! # FilterBar Component
//!
//! One row of filter controls: live search box, category filter, in-stock
//! toggle. The values live in `App.filters` — this component just renders
//! them and shows which control the keys currently drive (search mode gets
//! a highlighted border and a visible cursor).

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::Filters;
use crate::tui::component::Component;

/// Transient, props-based filter row. Created fresh each frame.
pub struct FilterBar<'a> {
    filters: &'a Filters,
    /// True while keystrokes are editing the search query.
    searching: bool,
}

impl<'a> FilterBar<'a> {
    pub fn new(filters: &'a Filters, searching: bool) -> Self {
        Self { filters, searching }
    }
}

impl Component for FilterBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [search_area, category_area, stock_area] =
            Layout::horizontal([Min(24), Length(22), Length(20)]).areas(area);

        // Search box: highlighted + cursor while in search mode
        let search_style = if self.searching {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let search = Paragraph::new(self.filters.search_query.as_str())
            .block(Block::bordered().title(" Search (/) ").border_style(search_style));
        frame.render_widget(search, search_area);
        if self.searching {
            let cursor_x = search_area.x + 1 + self.filters.search_query.len() as u16;
            frame.set_cursor_position((cursor_x.min(search_area.right().saturating_sub(2)), search_area.y + 1));
        }

        let category_label = self
            .filters
            .category
            .map(|c| c.label())
            .unwrap_or("All");
        let category = Paragraph::new(category_label)
            .block(Block::bordered().title(" Category (c) ").border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(category, category_area);

        let stock_label = if self.filters.in_stock_only {
            "[x] In stock only"
        } else {
            "[ ] In stock only"
        };
        let stock = Paragraph::new(stock_label)
            .block(Block::bordered().title(" Stock (s) ").border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(stock, stock_area);
    }
}
