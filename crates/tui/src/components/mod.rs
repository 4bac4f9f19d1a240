//! UI building blocks shared by the renderer.

/// Per-column filter input row.
pub mod filters;
/// Previous/next controls and the page label.
pub mod pagination;
/// Table pane showing the visible rows.
pub mod tables;
/// Tab bar across the top of the screen.
pub mod tabs;

pub use filters::{FilterRow, filter_line, render_filters};
pub use pagination::{pagination_line, render_pagination};
pub use tables::render_table;
pub use tabs::{render_tabs, tab_titles};
