//! # Category Chart Component
//!
//! Product distribution by category as a bar chart, one bar per category
//! (zero-count categories included, so the shape is stable as the
//! collection changes). Toggled with `g`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Paragraph};

use crate::core::product::Category;
use crate::tui::component::Component;

const BAR_COLORS: [Color; 7] = [
    Color::Blue,
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Red,
    Color::Gray,
];

/// Transient render wrapper over the counts computed by
/// `core::query::category_counts`.
pub struct CategoryChart<'a> {
    counts: &'a [(Category, usize)],
}

impl<'a> CategoryChart<'a> {
    pub fn new(counts: &'a [(Category, usize)]) -> Self {
        Self { counts }
    }
}

impl Component for CategoryChart<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Categories ")
            .border_style(Style::default().fg(Color::DarkGray));

        let total: usize = self.counts.iter().map(|(_, n)| n).sum();
        if total == 0 {
            let empty = Paragraph::new("No products")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let bars: Vec<Bar> = self
            .counts
            .iter()
            .enumerate()
            .map(|(i, (category, count))| {
                Bar::default()
                    .value(*count as u64)
                    .label(Line::from(category.short_label()))
                    .style(Style::default().fg(BAR_COLORS[i % BAR_COLORS.len()]))
                    .text_value(count.to_string())
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .bar_width(5)
            .bar_gap(1)
            .data(BarGroup::default().bars(&bars));

        frame.render_widget(chart, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::category_counts;
    use crate::test_support::sample_products;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(counts: &[(Category, usize)]) -> String {
        let backend = TestBackend::new(50, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                CategoryChart::new(counts).render(f, f.area());
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
    fn test_chart_renders_category_labels() {
        let products = sample_products();
        let counts = category_counts(&products);
        let text = render_to_text(&counts);
        assert!(text.contains("Categories"));
        assert!(text.contains("Books"));
    }

    #[test]
    fn test_chart_empty_collection() {
        let counts = category_counts(&[]);
        let text = render_to_text(&counts);
        assert!(text.contains("No products"));
    }
}
