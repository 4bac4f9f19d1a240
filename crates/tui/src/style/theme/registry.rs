use super::builtins::BUILT_IN_DEFINITIONS;
use super::types::Theme;

/// Canonical names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

/// Look up a theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| definition.answers_to(name))
		.map(|definition| definition.theme)
}
