//! Application state and behaviour for the interactive table viewer.
//!
//! The [`App`] type owns one [`ViewController`](tabview_core::ViewController)
//! per tab. Input handling lives in `actions`, drawing in `render`.

mod actions;
mod render;
mod state;

pub use state::{App, TableTab, ViewOutcome};
