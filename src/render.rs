//! Renders a page hierarchy into `nav.html` markup.
//!
//! The output is exactly what [`crate::load`] expects to find after injection:
//! every group starts closed, with its toggle collapsed and its sublist hidden.

use crate::{site::Page, NavConfig};

/// Renders with the default markup convention.
#[must_use]
pub fn fragment(pages: &[Page]) -> String {
	fragment_with(pages, &NavConfig::default())
}

#[must_use]
pub fn fragment_with(pages: &[Page], config: &NavConfig) -> String {
	let mut html = format!(r#"<ul class="{}">"#, config.list_class);
	for page in pages {
		render_page(&mut html, page, config.item_class, config);
	}
	html.push_str("</ul>");
	html
}

fn render_page(html: &mut String, page: &Page, wrapper_class: &str, config: &NavConfig) {
	let title = escape(&page.title);
	if page.has_children() {
		html.push_str(&format!(r#"<li class="{} {}">"#, wrapper_class, config.group_class));
	} else {
		html.push_str(&format!(r#"<li class="{}">"#, wrapper_class));
	}
	html.push_str(&format!(r#"<a {} href="{}">{}</a>"#, config.link_attribute, escape(&page.href()), title));

	if page.has_children() {
		html.push_str(&format!(
			r#"<button type="button" class="{}" {}="false" aria-label="Toggle {}"></button>"#,
			config.toggle_class, config.expanded_attribute, title
		));
		html.push_str(&format!(r#"<ul class="{}" {}>"#, config.sublist_class, config.hidden_attribute));
		for child in &page.children {
			render_page(html, child, config.subitem_class, config);
		}
		html.push_str("</ul>");
	}
	html.push_str("</li>");
}

/// Escapes for both attribute values and element text.
fn escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}
