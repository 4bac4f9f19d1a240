mod builtins;
mod registry;
mod types;

pub use builtins::{LIGHT, SLATE, SOLARIZED, default_theme};
pub use registry::{by_name, names};
pub use types::Theme;

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
