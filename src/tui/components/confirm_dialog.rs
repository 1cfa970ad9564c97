//! # Confirm Dialog Component
//!
//! Small centered overlay guarding the destructive actions: single delete
//! (`d`) and batch delete (`D`). `y`/Enter confirms, `n`/Esc cancels.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// What the pending delete applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteTarget {
    One { id: String, name: String },
    Selected { count: usize },
}

/// Persistent state for the confirmation overlay.
pub struct ConfirmState {
    pub target: DeleteTarget,
}

impl ConfirmState {
    pub fn new(target: DeleteTarget) -> Self {
        Self { target }
    }

    fn message(&self) -> String {
        match &self.target {
            DeleteTarget::One { name, .. } => {
                format!(
                    "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                    name
                )
            }
            DeleteTarget::Selected { count } => {
                format!(
                    "Are you sure you want to delete {} selected products? This action cannot be undone.",
                    count
                )
            }
        }
    }
}

/// Events emitted by the confirmation overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmEvent {
    Confirm,
    Cancel,
}

impl EventHandler for ConfirmState {
    type Event = ConfirmEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ConfirmEvent> {
        match event {
            TuiEvent::InputChar('y') | TuiEvent::Submit => Some(ConfirmEvent::Confirm),
            TuiEvent::InputChar('n') | TuiEvent::Escape => Some(ConfirmEvent::Cancel),
            _ => None,
        }
    }
}

/// Transient render wrapper for the confirmation overlay.
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 25, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Confirm Deletion ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" y Delete  n Cancel ").centered())
            .padding(Padding::horizontal(1));

        let message = Paragraph::new(self.state.message())
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(message, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
