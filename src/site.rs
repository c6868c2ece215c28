//! The site's page hierarchy, as the navigation fragment presents it.

use unicode_normalization::UnicodeNormalization;

/// A titled page, possibly heading a group of child pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
	pub title: String,
	pub slug: String,
	pub children: Vec<Page>,
}

impl Page {
	/// A page whose slug is derived from its title via [`slugify`].
	#[must_use]
	pub fn new(title: impl Into<String>, children: Vec<Page>) -> Self {
		let title = title.into();
		Self {
			slug: slugify(&title),
			title,
			children,
		}
	}

	#[must_use]
	pub fn leaf(title: impl Into<String>) -> Self {
		Self::new(title, Vec::new())
	}

	/// A page with an explicit slug, like the home page (`index`).
	#[must_use]
	pub fn with_slug(title: impl Into<String>, slug: impl Into<String>, children: Vec<Page>) -> Self {
		Self {
			title: title.into(),
			slug: slug.into(),
			children,
		}
	}

	/// The link target of this page, relative to the site root.
	#[must_use]
	pub fn href(&self) -> String {
		format!("{}.html", self.slug)
	}

	#[must_use]
	pub fn has_children(&self) -> bool {
		!self.children.is_empty()
	}

	/// Searches this page and its descendants, depth first.
	#[must_use]
	pub fn find(&self, slug: &str) -> Option<&Page> {
		if self.slug == slug {
			return Some(self);
		}
		self.children.iter().find_map(|child| child.find(slug))
	}
}

/// Turns a page title into a file name stem.
///
/// Accents are decomposed and dropped, `&` reads as "and", apostrophes vanish,
/// and every other run of non-alphanumerics becomes a single `-`.
#[must_use]
pub fn slugify(text: &str) -> String {
	let ascii: String = text.nfkd().filter(char::is_ascii).collect();
	let ascii = ascii.replace('&', " and ").replace('\'', "");

	let mut slug = String::with_capacity(ascii.len());
	for c in ascii.chars() {
		if c.is_ascii_alphanumeric() {
			slug.push(c.to_ascii_lowercase());
		} else if !slug.ends_with('-') {
			slug.push('-');
		}
	}
	slug.trim_matches('-').to_owned()
}
