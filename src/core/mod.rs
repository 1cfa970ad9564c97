//! # Core Application Logic
//!
//! This module contains Tally's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (collection)   │
//!                    │  • Action (commands)    │
//!                    │  • update() (reducer)   │
//!                    │  • query (filter/sort/  │
//!                    │    paginate, pure)      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │    API     │
//!     │  Adapter   │      │  Adapter   │      │  (future)  │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — collection, selection, view parameters
//! - [`action`]: The `Action` enum and `update()` — the only way state changes
//! - [`query`]: Pure filter → sort → paginate derivation of the visible page
//! - [`product`]: The `Product` record and its `Category` enum
//! - [`seed`]: Built-in demo dataset and JSON seed-file loading
//! - [`config`]: `~/.tally/config.toml` with env/CLI overrides

pub mod action;
pub mod config;
pub mod product;
pub mod query;
pub mod seed;
pub mod state;
