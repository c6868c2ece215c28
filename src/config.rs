//! Names shared between the navigation fragment, the pages hosting it and this crate.

/// The markup convention the loader looks for and writes.
///
/// [`Default`] yields the convention used by the site's own `nav.html`.
/// Every value is static, so a [`NavConfig`] can be copied freely into event handlers and spawned tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavConfig {
	/// Attribute marking a navigation placeholder, i.e. a mount point.
	pub placeholder_attribute: &'static str,
	/// Relative location of the shared navigation fragment.
	pub fragment_url: &'static str,
	/// Markup that replaces a placeholder's content when the fragment can't be loaded.
	pub error_markup: &'static str,

	/// Attribute marking an anchor as a navigation link.
	pub link_attribute: &'static str,
	pub active_class: &'static str,
	pub current_attribute: &'static str,
	pub current_value: &'static str,

	pub list_class: &'static str,
	pub item_class: &'static str,
	pub subitem_class: &'static str,
	/// Marks an item (or subitem) as a collapsible group.
	pub group_class: &'static str,
	pub open_class: &'static str,
	pub toggle_class: &'static str,
	pub sublist_class: &'static str,
	pub hidden_attribute: &'static str,
	pub expanded_attribute: &'static str,
}

impl Default for NavConfig {
	fn default() -> Self {
		Self {
			placeholder_attribute: "data-site-nav",
			fragment_url: "nav.html",
			error_markup: r#"<p class="site-nav__error" role="alert">Navigation could not be loaded.</p>"#,

			link_attribute: "data-nav-link",
			active_class: "is-active",
			current_attribute: "aria-current",
			current_value: "page",

			list_class: "site-nav__list",
			item_class: "site-nav__item",
			subitem_class: "site-nav__subitem",
			group_class: "site-nav__item--has-children",
			open_class: "is-open",
			toggle_class: "site-nav__toggle",
			sublist_class: "site-nav__sublist",
			hidden_attribute: "hidden",
			expanded_attribute: "aria-expanded",
		}
	}
}

impl NavConfig {
	/// CSS selector matching every placeholder in a document.
	#[must_use]
	pub fn placeholder_selector(&self) -> String {
		format!("[{}]", self.placeholder_attribute)
	}
}
