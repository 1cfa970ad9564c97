//! # Header Component
//!
//! Top bar showing the application name and collection summary.
//!
//! Stateless: it receives counts as props and renders what it's given —
//! trivial to test, no hidden dependency on the store.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

/// Top bar component showing product and selection counts.
pub struct Header {
    pub product_count: usize,
    pub selected_count: usize,
}

impl Header {
    pub fn new(product_count: usize, selected_count: usize) -> Self {
        Self {
            product_count,
            selected_count,
        }
    }
}

impl Component for Header {
    /// Always a single line. The selection count only appears when
    /// something is actually selected.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = if self.selected_count > 0 {
            format!(
                " Tally — Inventory | {} products | {} selected",
                self.product_count, self.selected_count
            )
        } else {
            format!(" Tally — Inventory | {} products", self.product_count)
        };
        frame.render_widget(
            Span::styled(text, Style::default().add_modifier(Modifier::BOLD)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(header: &mut Header) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                header.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_header_shows_product_count() {
        let mut header = Header::new(12, 0);
        let text = render_to_text(&mut header);
        assert!(text.contains("Tally — Inventory"));
        assert!(text.contains("12 products"));
        assert!(!text.contains("selected"));
    }

    #[test]
    fn test_header_shows_selection_count_when_nonzero() {
        let mut header = Header::new(12, 3);
        let text = render_to_text(&mut header);
        assert!(text.contains("12 products"));
        assert!(text.contains("3 selected"));
    }
}
