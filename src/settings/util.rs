/// Trim a user-supplied name, treating blank values as unset.
pub(super) fn non_empty(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}
