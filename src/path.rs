//! Page path normalization, shared by the current location and every link target.

/// The page a bare directory (or an empty path) resolves to.
pub const DEFAULT_PAGE: &str = "index.html";

/// Cuts `raw` off at its first `?` or `#`.
///
/// An empty result, including a missing `raw`, becomes [`DEFAULT_PAGE`].
/// Nothing else is changed: there's no case folding and no slash handling.
#[must_use]
pub fn normalize(raw: Option<&str>) -> &str {
	let raw = raw.unwrap_or_default();
	let end = raw.find(['?', '#']).unwrap_or(raw.len());
	match &raw[..end] {
		"" => DEFAULT_PAGE,
		path => path,
	}
}

/// The normalized last segment of a location's path name.
///
/// Directory prefixes are discarded, so `/docs/guide.html` and `guide.html` name the same page.
/// Query and fragment are cut off first, so a `/` inside them doesn't count as a separator.
#[must_use]
pub fn current_page(pathname: &str) -> &str {
	normalize(normalize(Some(pathname)).rsplit('/').next())
}
