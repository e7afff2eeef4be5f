//! PipGrowth TUI - terminal view of a compounding-growth run
//!
//! One screen:
//! - Summary header with the outcome
//! - Balance chart (log axis by default) with a selected-trade tooltip
//! - Scrollable ledger table
//! - Help overlay

pub mod app;
pub mod navigation;
pub mod panels;
pub mod theme;
pub mod ui;

pub use app::{App, Focus};
pub use navigation::handle_key_event;
pub use theme::Theme;
