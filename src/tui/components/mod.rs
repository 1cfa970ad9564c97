//! # TUI Components
//!
//! All UI components for the terminal dashboard.
//!
//! ## Component Architecture
//!
//! Components here follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as struct fields and
//! render what they're given:
//! - `Header`: top bar with product/selection counts
//! - `FilterBar`: search box, category filter, in-stock toggle
//! - `CategoryChart`: bar chart of products per category
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! Components with state that outlives a frame keep it in a `*State` struct
//! owned by `TuiState`; a lightweight wrapper borrows it each frame:
//! - `ProductTable` / `ProductTableState`: the grid and its row cursor
//! - `ProductForm` / `ProductFormState`: add/edit overlay with validation
//! - `ConfirmDialog` / `ConfirmState`: delete confirmation overlay
//!
//! The overlay `*State` types implement `EventHandler` and emit high-level
//! events (`FormEvent`, `ConfirmEvent`); the event loop decides what those
//! mean. Components never dispatch actions themselves — data flows down as
//! props, intent flows up as events.

mod category_chart;
mod confirm_dialog;
mod filter_bar;
mod header;
mod product_form;
mod product_table;

pub use category_chart::CategoryChart;
pub use confirm_dialog::{ConfirmDialog, ConfirmEvent, ConfirmState, DeleteTarget};
pub use filter_bar::FilterBar;
pub use header::Header;
pub use product_form::{FormEvent, ProductForm, ProductFormState};
pub use product_table::{ProductTable, ProductTableState};
