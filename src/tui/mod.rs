//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the dashboard,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is that a different adapter (web, API) could sit on the
//! same core without touching it.
//!
//! ## Event routing
//!
//! Events are interpreted in priority order:
//!
//! 1. Ctrl+C quits from anywhere.
//! 2. An open overlay (product form, delete confirmation) captures
//!    everything else.
//! 3. Otherwise the current `Mode` decides: `Browse` treats keys as
//!    commands, `Search` feeds them into the search query (live — every
//!    keystroke re-filters and resets the page through the reducer).
//!
//! The derived view (filter → sort → paginate) is recomputed from the
//! current snapshot both before key handling and on every draw; nothing is
//! cached between frames.

mod component;
mod components;
mod event;
mod format;
mod ui;

use log::info;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::product::{Category, Product};
use crate::core::state::{App, SortDirection, SortField, Sorting};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ConfirmEvent, ConfirmState, DeleteTarget, FormEvent, ProductFormState, ProductTableState,
};
use crate::tui::event::{TuiEvent, poll_event};

/// Page sizes the `i` key cycles through.
const PAGE_SIZES: [usize; 4] = [5, 10, 25, 50];

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Keys are dashboard commands; arrows move the row cursor.
    Browse,
    /// Keystrokes edit the search query. Esc/Enter returns to Browse.
    Search,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub table: ProductTableState,
    pub mode: Mode,
    pub show_chart: bool,
    pub low_stock_threshold: u32,
    // Overlays (None = hidden)
    pub form: Option<ProductFormState>,
    pub confirm: Option<ConfirmState>,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            table: ProductTableState::new(),
            mode: Mode::Browse,
            show_chart: config.show_chart,
            low_stock_threshold: config.low_stock_threshold,
            form: None,
            confirm: None,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            table: ProductTableState::new(),
            mode: Mode::Browse,
            show_chart: true,
            low_stock_threshold: 10,
            form: None,
            confirm: None,
        }
    }
}

pub fn run(config: ResolvedConfig, products: Vec<Product>) -> std::io::Result<()> {
    let mut app = App::from_config(products, &config);
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    info!("Dashboard started with {} products", app.products.len());

    loop {
        terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;

        let Some(event) = poll_event() else {
            continue;
        };

        // Ctrl+C always quits regardless of mode
        if matches!(event, TuiEvent::ForceQuit) {
            if update(&mut app, Action::Quit) == Effect::Quit {
                break;
            }
            continue;
        }

        // Resize just needs a redraw, which the next loop turn does anyway
        if matches!(event, TuiEvent::Resize) {
            continue;
        }

        // When the product form is open, route all events to it
        if let Some(form) = &mut tui.form {
            if let Some(form_event) = form.handle_event(&event) {
                match form_event {
                    FormEvent::Submit { id: Some(id), draft } => {
                        update(&mut app, Action::UpdateProduct { id, draft });
                        tui.form = None;
                    }
                    FormEvent::Submit { id: None, draft } => {
                        update(&mut app, Action::AddProduct(draft));
                        tui.form = None;
                    }
                    FormEvent::Dismiss => {
                        tui.form = None;
                    }
                }
            }
            continue;
        }

        // Same for a pending delete confirmation
        if let Some(confirm) = &mut tui.confirm {
            if let Some(confirm_event) = confirm.handle_event(&event) {
                if confirm_event == ConfirmEvent::Confirm {
                    let action = match &confirm.target {
                        DeleteTarget::One { id, .. } => Action::DeleteProduct(id.clone()),
                        DeleteTarget::Selected { .. } => Action::DeleteSelected,
                    };
                    update(&mut app, action);
                }
                tui.confirm = None;
            }
            continue;
        }

        // Modal event dispatch
        match tui.mode {
            Mode::Search => handle_search_event(&mut app, &mut tui, &event),
            Mode::Browse => {
                if handle_browse_event(&mut app, &mut tui, &event) == Effect::Quit {
                    break;
                }
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Search mode: every keystroke goes through the reducer so the page-reset
/// rule holds for live typing too.
fn handle_search_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) {
    match event {
        TuiEvent::Escape | TuiEvent::Submit => {
            tui.mode = Mode::Browse;
        }
        TuiEvent::InputChar(c) => {
            let mut query = app.filters.search_query.clone();
            query.push(*c);
            update(app, Action::SetSearchQuery(query));
        }
        TuiEvent::Backspace => {
            let mut query = app.filters.search_query.clone();
            query.pop();
            update(app, Action::SetSearchQuery(query));
        }
        _ => {}
    }
}

fn handle_browse_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    // Snapshot what the keys need from the derived view before mutating
    let (page_len, total_pages, highlighted) = {
        let view = ui::derive_view(app);
        tui.table.clamp(view.page.len());
        (
            view.page.len(),
            view.total_pages,
            view.page.get(tui.table.cursor).map(|p| (*p).clone()),
        )
    };

    match event {
        TuiEvent::InputChar('q') => return update(app, Action::Quit),

        TuiEvent::CursorUp => tui.table.move_up(),
        TuiEvent::CursorDown => tui.table.move_down(page_len),

        TuiEvent::CursorLeft => {
            let page = app.pagination.current_page;
            if page > 1 {
                update(app, Action::SetCurrentPage(page - 1));
            }
        }
        TuiEvent::CursorRight => {
            let page = app.pagination.current_page;
            if page < total_pages {
                update(app, Action::SetCurrentPage(page + 1));
            }
        }

        TuiEvent::InputChar(' ') => {
            if let Some(product) = &highlighted {
                update(app, Action::ToggleSelection(product.id.clone()));
            }
        }
        TuiEvent::InputChar('a') => {
            let all_selected =
                !app.products.is_empty() && app.selected.len() == app.products.len();
            let action = if all_selected {
                Action::DeselectAll
            } else {
                Action::SelectAll
            };
            update(app, action);
        }

        TuiEvent::InputChar('n') => {
            tui.form = Some(ProductFormState::new_add());
        }
        TuiEvent::InputChar('e') | TuiEvent::Submit => {
            if let Some(product) = &highlighted {
                tui.form = Some(ProductFormState::new_edit(product));
            }
        }

        TuiEvent::InputChar('d') => {
            if let Some(product) = &highlighted {
                tui.confirm = Some(ConfirmState::new(DeleteTarget::One {
                    id: product.id.clone(),
                    name: product.name.clone(),
                }));
            }
        }
        TuiEvent::InputChar('D') => {
            if !app.selected.is_empty() {
                tui.confirm = Some(ConfirmState::new(DeleteTarget::Selected {
                    count: app.selected.len(),
                }));
            }
        }

        TuiEvent::InputChar('/') => {
            tui.mode = Mode::Search;
        }
        TuiEvent::InputChar('c') => {
            let next = next_category_filter(app.filters.category);
            update(app, Action::SetCategoryFilter(next));
        }
        TuiEvent::InputChar('s') => {
            update(app, Action::ToggleInStockFilter);
        }
        TuiEvent::InputChar('g') => {
            tui.show_chart = !tui.show_chart;
        }
        TuiEvent::InputChar('i') => {
            let next = next_page_size(app.pagination.items_per_page);
            update(app, Action::SetItemsPerPage(next));
        }

        TuiEvent::InputChar('0') => {
            update(
                app,
                Action::SetSorting {
                    field: None,
                    direction: SortDirection::Asc,
                },
            );
        }
        TuiEvent::InputChar(c @ '1'..='5') => {
            let field = match *c {
                '1' => SortField::Name,
                '2' => SortField::Category,
                '3' => SortField::Price,
                '4' => SortField::Stock,
                _ => SortField::UpdatedAt,
            };
            update(app, sort_action(&app.sorting, field));
        }

        _ => {}
    }
    Effect::None
}

/// Same-key press flips direction, a new key starts ascending — the usual
/// column-header toggle.
fn sort_action(current: &Sorting, field: SortField) -> Action {
    let direction = if current.field == Some(field) {
        current.direction.flipped()
    } else {
        SortDirection::Asc
    };
    Action::SetSorting {
        field: Some(field),
        direction,
    }
}

/// All → Electronics → … → Other → All.
fn next_category_filter(current: Option<Category>) -> Option<Category> {
    match current {
        None => Some(Category::ALL[0]),
        Some(category) => {
            let index = Category::ALL
                .iter()
                .position(|c| *c == category)
                .unwrap_or(0);
            Category::ALL.get(index + 1).copied()
        }
    }
}

fn next_page_size(current: usize) -> usize {
    match PAGE_SIZES.iter().position(|s| *s == current) {
        Some(index) => PAGE_SIZES[(index + 1) % PAGE_SIZES.len()],
        // A config-supplied size outside the cycle restarts it
        None => PAGE_SIZES[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_sort_action_toggles_like_a_header_click() {
        let sorting = Sorting {
            field: Some(SortField::Name),
            direction: SortDirection::Asc,
        };
        assert_eq!(
            sort_action(&sorting, SortField::Name),
            Action::SetSorting {
                field: Some(SortField::Name),
                direction: SortDirection::Desc,
            }
        );
        assert_eq!(
            sort_action(&sorting, SortField::Price),
            Action::SetSorting {
                field: Some(SortField::Price),
                direction: SortDirection::Asc,
            }
        );
    }

    #[test]
    fn test_next_category_filter_cycles_back_to_all() {
        let mut current = None;
        for expected in Category::ALL {
            current = next_category_filter(current);
            assert_eq!(current, Some(expected));
        }
        assert_eq!(next_category_filter(current), None);
    }

    #[test]
    fn test_next_page_size_cycles() {
        assert_eq!(next_page_size(5), 10);
        assert_eq!(next_page_size(10), 25);
        assert_eq!(next_page_size(25), 50);
        assert_eq!(next_page_size(50), 5);
        assert_eq!(next_page_size(42), 5);
    }

    #[test]
    fn test_browse_quit_key() {
        let mut app = test_app();
        let mut tui = TuiState::for_tests();
        let effect = handle_browse_event(&mut app, &mut tui, &TuiEvent::InputChar('q'));
        assert_eq!(effect, Effect::Quit);
    }

    #[test]
    fn test_browse_space_toggles_highlighted_row() {
        let mut app = test_app();
        let mut tui = TuiState::for_tests();

        handle_browse_event(&mut app, &mut tui, &TuiEvent::InputChar(' '));
        assert_eq!(app.selected.len(), 1);

        handle_browse_event(&mut app, &mut tui, &TuiEvent::InputChar(' '));
        assert!(app.selected.is_empty());
    }

    #[test]
    fn test_browse_select_all_toggle() {
        let mut app = test_app();
        let mut tui = TuiState::for_tests();

        handle_browse_event(&mut app, &mut tui, &TuiEvent::InputChar('a'));
        assert_eq!(app.selected.len(), app.products.len());

        handle_browse_event(&mut app, &mut tui, &TuiEvent::InputChar('a'));
        assert!(app.selected.is_empty());
    }

    #[test]
    fn test_browse_page_navigation_is_bounded() {
        let mut app = test_app(); // 12 products, 10 per page → 2 pages
        let mut tui = TuiState::for_tests();

        handle_browse_event(&mut app, &mut tui, &TuiEvent::CursorLeft);
        assert_eq!(app.pagination.current_page, 1, "can't go before page 1");

        handle_browse_event(&mut app, &mut tui, &TuiEvent::CursorRight);
        assert_eq!(app.pagination.current_page, 2);

        handle_browse_event(&mut app, &mut tui, &TuiEvent::CursorRight);
        assert_eq!(app.pagination.current_page, 2, "can't go past the last page");
    }

    #[test]
    fn test_browse_edit_opens_prefilled_form() {
        let mut app = test_app();
        let mut tui = TuiState::for_tests();

        handle_browse_event(&mut app, &mut tui, &TuiEvent::InputChar('e'));
        let form = tui.form.expect("edit should open the form");
        assert!(form.editing.is_some());
    }

    #[test]
    fn test_browse_batch_delete_needs_a_selection() {
        let mut app = test_app();
        let mut tui = TuiState::for_tests();

        handle_browse_event(&mut app, &mut tui, &TuiEvent::InputChar('D'));
        assert!(tui.confirm.is_none());

        handle_browse_event(&mut app, &mut tui, &TuiEvent::InputChar(' '));
        handle_browse_event(&mut app, &mut tui, &TuiEvent::InputChar('D'));
        assert!(matches!(
            tui.confirm,
            Some(ConfirmState {
                target: DeleteTarget::Selected { count: 1 }
            })
        ));
    }

    #[test]
    fn test_search_mode_edits_query_through_reducer() {
        let mut app = test_app();
        let mut tui = TuiState::for_tests();
        tui.mode = Mode::Search;
        update(&mut app, Action::SetCurrentPage(2));

        handle_search_event(&mut app, &mut tui, &TuiEvent::InputChar('b'));
        assert_eq!(app.filters.search_query, "b");
        assert_eq!(app.pagination.current_page, 1, "typing resets the page");

        handle_search_event(&mut app, &mut tui, &TuiEvent::Backspace);
        assert_eq!(app.filters.search_query, "");

        handle_search_event(&mut app, &mut tui, &TuiEvent::Escape);
        assert_eq!(tui.mode, Mode::Browse);
    }
}
