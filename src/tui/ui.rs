use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::core::product::Product;
use crate::core::query::{
    category_counts, filter_products, paginate_products, sort_products, total_pages,
};
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    CategoryChart, ConfirmDialog, FilterBar, Header, ProductForm, ProductTable,
};
use crate::tui::{Mode, TuiState};

const HELP_LINE: &str = " n New  e Edit  d Delete  D Del selected  Space Select  a All  / Search  c Category  s Stock  1-5 Sort  ←/→ Page  i Page size  g Chart  q Quit";

/// The derived slice the table displays: filter → sort → paginate over the
/// current snapshot. Recomputed on every draw and before key handling —
/// collections are small, so there's nothing to cache.
pub struct DerivedView<'a> {
    pub page: Vec<&'a Product>,
    pub filtered_count: usize,
    pub total_pages: usize,
}

pub fn derive_view(app: &App) -> DerivedView<'_> {
    let filtered = filter_products(&app.products, &app.filters);
    let filtered_count = filtered.len();
    let sorted = sort_products(&filtered, app.sorting.field, app.sorting.direction);
    let page = paginate_products(
        &sorted,
        app.pagination.current_page,
        app.pagination.items_per_page,
    );
    DerivedView {
        page,
        filtered_count,
        total_pages: total_pages(filtered_count, app.pagination.items_per_page),
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};
    let [header_area, filter_area, main_area, status_area, help_area] =
        Layout::vertical([Length(1), Length(3), Min(0), Length(1), Length(1)]).areas(frame.area());

    let view = derive_view(app);

    Header::new(app.products.len(), app.selected.len()).render(frame, header_area);
    FilterBar::new(&app.filters, tui.mode == Mode::Search).render(frame, filter_area);

    let table_area = if tui.show_chart {
        let [table_area, chart_area] =
            Layout::horizontal([Percentage(65), Percentage(35)]).areas(main_area);
        let counts = category_counts(&app.products);
        CategoryChart::new(&counts).render(frame, chart_area);
        table_area
    } else {
        main_area
    };

    ProductTable::new(
        &mut tui.table,
        &view.page,
        &app.selected,
        &app.sorting,
        tui.low_stock_threshold,
    )
    .render(frame, table_area);

    frame.render_widget(Span::raw(status_line(app, &view)), status_area);
    frame.render_widget(
        Span::styled(
            HELP_LINE,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        ),
        help_area,
    );

    // Overlays last, over everything else
    if let Some(confirm) = &tui.confirm {
        ConfirmDialog::new(confirm).render(frame, frame.area());
    }
    if let Some(form) = &tui.form {
        ProductForm::new(form).render(frame, frame.area());
    }
}

/// "Showing 1 to 10 of 34 results | Page 1 of 4 | ..." — pagination
/// summary plus the transient status message.
fn status_line(app: &App, view: &DerivedView) -> String {
    let per_page = app.pagination.items_per_page;
    let current = app.pagination.current_page;
    let start = if view.page.is_empty() {
        0
    } else {
        current.saturating_sub(1) * per_page + 1
    };
    let end = if view.page.is_empty() {
        0
    } else {
        start + view.page.len() - 1
    };
    format!(
        " Showing {} to {} of {} results | Page {} of {} | {}",
        start, end, view.filtered_count, current, view.total_pages, app.status_message
    )
}
