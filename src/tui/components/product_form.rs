//! # Product Form Component
//!
//! Full-screen overlay for adding or editing a product. Opened with `n`
//! (add) or `e` (edit), dismissed with Esc.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ProductFormState` lives in `TuiState` while the overlay is open
//! - `ProductForm` is created each frame with borrowed state
//!
//! This is the validation boundary the core relies on: drafts only leave
//! this form once the name is non-empty, price and stock parse as
//! non-negative numbers, and the image is empty or a well-formed URL.
//! Empty optional inputs map to `None`, never to empty strings.

use std::collections::HashMap;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use url::Url;

use crate::core::product::{Category, Product, ProductDraft};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::format::format_currency;

/// The form's input fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Category,
    Price,
    Stock,
    Image,
    Description,
}

impl FormField {
    const ORDER: [FormField; 6] = [
        FormField::Name,
        FormField::Category,
        FormField::Price,
        FormField::Stock,
        FormField::Image,
        FormField::Description,
    ];

    fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Category => "Category",
            FormField::Price => "Price",
            FormField::Stock => "Stock",
            FormField::Image => "Image URL",
            FormField::Description => "Description",
        }
    }

    fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Events emitted by the form overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// A validated draft; `id` is `Some` when editing an existing product.
    Submit {
        id: Option<String>,
        draft: ProductDraft,
    },
    Dismiss,
}

/// Persistent state for the form overlay. Text fields are raw buffers;
/// parsing happens at submit time so partially typed numbers never fight
/// the user.
pub struct ProductFormState {
    pub editing: Option<String>,
    pub name: String,
    pub category: Category,
    pub price: String,
    pub stock: String,
    pub image: String,
    pub description: String,
    pub focus: FormField,
    pub errors: HashMap<FormField, String>,
}

impl ProductFormState {
    /// Blank form for a new product.
    pub fn new_add() -> Self {
        Self {
            editing: None,
            name: String::new(),
            category: Category::Electronics,
            price: "0".to_string(),
            stock: "0".to_string(),
            image: String::new(),
            description: String::new(),
            focus: FormField::Name,
            errors: HashMap::new(),
        }
    }

    /// Form prefilled from an existing product. Absent optionals become
    /// empty buffers and are mapped back to `None` on submit.
    pub fn new_edit(product: &Product) -> Self {
        Self {
            editing: Some(product.id.clone()),
            name: product.name.clone(),
            category: product.category,
            price: format!("{:.2}", product.price),
            stock: product.stock.to_string(),
            image: product.image.clone().unwrap_or_default(),
            description: product.description.clone().unwrap_or_default(),
            focus: FormField::Name,
            errors: HashMap::new(),
        }
    }

    fn focused_buffer_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Price => Some(&mut self.price),
            FormField::Stock => Some(&mut self.stock),
            FormField::Image => Some(&mut self.image),
            FormField::Description => Some(&mut self.description),
            FormField::Category => None,
        }
    }

    fn cycle_category(&mut self, step: isize) {
        let len = Category::ALL.len() as isize;
        let index = Category::ALL
            .iter()
            .position(|c| *c == self.category)
            .unwrap_or(0) as isize;
        let next = (index + step).rem_euclid(len) as usize;
        self.category = Category::ALL[next];
    }

    /// Validate all fields, recording errors. Returns the draft only when
    /// everything passes.
    pub fn validate(&mut self) -> Option<ProductDraft> {
        self.errors.clear();

        let name = self.name.trim();
        if name.is_empty() {
            self.errors
                .insert(FormField::Name, "Product name is required".to_string());
        }

        let price = match self.price.trim().parse::<f64>() {
            Ok(p) if p.is_finite() && p >= 0.0 => Some(p),
            Ok(_) => {
                self.errors
                    .insert(FormField::Price, "Price cannot be negative".to_string());
                None
            }
            Err(_) => {
                self.errors
                    .insert(FormField::Price, "Enter a valid price".to_string());
                None
            }
        };

        // u32 parsing rejects negatives and fractions in one go
        let stock = match self.stock.trim().parse::<u32>() {
            Ok(s) => Some(s),
            Err(_) => {
                self.errors
                    .insert(FormField::Stock, "Enter a valid stock count".to_string());
                None
            }
        };

        let image = self.image.trim();
        if !image.is_empty() && Url::parse(image).is_err() {
            self.errors
                .insert(FormField::Image, "Please enter a valid URL".to_string());
        }

        if !self.errors.is_empty() {
            return None;
        }

        let description = self.description.trim();
        Some(ProductDraft {
            name: name.to_string(),
            category: self.category,
            price: price?,
            stock: stock?,
            image: (!image.is_empty()).then(|| image.to_string()),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

impl EventHandler for ProductFormState {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::Escape => Some(FormEvent::Dismiss),
            TuiEvent::Tab | TuiEvent::CursorDown => {
                self.focus = self.focus.next();
                None
            }
            TuiEvent::BackTab | TuiEvent::CursorUp => {
                self.focus = self.focus.prev();
                None
            }
            TuiEvent::CursorLeft if self.focus == FormField::Category => {
                self.cycle_category(-1);
                None
            }
            TuiEvent::CursorRight if self.focus == FormField::Category => {
                self.cycle_category(1);
                None
            }
            TuiEvent::InputChar(c) => {
                let c = *c;
                // Editing a field clears its stale error
                let focus = self.focus;
                if let Some(buffer) = self.focused_buffer_mut() {
                    buffer.push(c);
                    self.errors.remove(&focus);
                }
                None
            }
            TuiEvent::Backspace => {
                let focus = self.focus;
                if let Some(buffer) = self.focused_buffer_mut() {
                    buffer.pop();
                    self.errors.remove(&focus);
                }
                None
            }
            TuiEvent::Submit => {
                let id = self.editing.clone();
                self.validate().map(|draft| FormEvent::Submit { id, draft })
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the form overlay.
pub struct ProductForm<'a> {
    state: &'a ProductFormState,
}

impl<'a> ProductForm<'a> {
    pub fn new(state: &'a ProductFormState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 70, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let title = if self.state.editing.is_some() {
            " Edit Product "
        } else {
            " Add Product "
        };
        let help_text = " Enter Save  Tab Next  ←/→ Category  Esc Cancel ";

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        let mut lines: Vec<Line> = Vec::new();
        for field in FormField::ORDER {
            let focused = self.state.focus == field;
            let value = self.field_display(field, focused);

            let label_style = if focused {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            lines.push(Line::from(vec![
                Span::styled(format!("{:<13}", field.label()), label_style),
                value,
            ]));

            if let Some(error) = self.state.errors.get(&field) {
                lines.push(Line::from(Span::styled(
                    format!("             ! {}", error),
                    Style::default().fg(Color::Red),
                )));
            }
            lines.push(Line::from(""));
        }

        let form = Paragraph::new(lines).block(block);
        frame.render_widget(form, overlay);
    }

    fn field_display(&self, field: FormField, focused: bool) -> Span<'_> {
        let style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };

        match field {
            FormField::Category => {
                let text = if focused {
                    format!("< {} >", self.state.category.label())
                } else {
                    self.state.category.label().to_string()
                };
                Span::styled(text, style)
            }
            FormField::Price => {
                // Live currency preview next to the raw input
                let preview = self
                    .state
                    .price
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|p| p.is_finite())
                    .map(|p| format!("  ({})", format_currency(p)))
                    .unwrap_or_default();
                Span::styled(
                    format!("{}{}{}", self.state.price, cursor_mark(focused), preview),
                    style,
                )
            }
            FormField::Name => {
                Span::styled(format!("{}{}", self.state.name, cursor_mark(focused)), style)
            }
            FormField::Stock => {
                Span::styled(format!("{}{}", self.state.stock, cursor_mark(focused)), style)
            }
            FormField::Image => {
                Span::styled(format!("{}{}", self.state.image, cursor_mark(focused)), style)
            }
            FormField::Description => Span::styled(
                format!("{}{}", self.state.description, cursor_mark(focused)),
                style,
            ),
        }
    }
}

fn cursor_mark(focused: bool) -> &'static str {
    if focused { "▏" } else { "" }
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
