//! Interactive terminal viewer for filterable, paginated tables.
//!
//! Each table gets its own tab with a row of per-column filter inputs, the
//! visible rows, and previous/next page controls. All view state lives in
//! [`tabview_core::ViewController`]; this crate only draws it and forwards
//! key presses.

mod app;
pub mod components;
mod runtime;
#[cfg(test)]
mod snapshot_tests;
pub mod style;

pub use app::{App, TableTab, ViewOutcome};
pub use runtime::run;
pub use style::{Theme, by_name, default_theme, names};
