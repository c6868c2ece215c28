#![cfg(target_arch = "wasm32")]

use site_nav_dom::{
	decorate::{attach_toggle_handlers, decorate, mark_active_link, sync_toggle_state},
	load::load_nav,
	render,
	tree::Command,
	NavConfig,
};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

use web_support_::{click, init_logging, is_open, mount, query, query_all, site};

#[wasm_bindgen_test]
fn single_active_link() {
	init_logging();
	let root = mount(&render::fragment(&site()));

	let decoration = decorate(&root, "ai-contribution-statement.html", &NavConfig::default());
	assert_eq!(decoration.report.matched.len(), 1);
	assert_eq!(decoration.report.expanded, None);

	let link = query(&root, r#"a[href="ai-contribution-statement.html"]"#);
	assert!(link.class_list().contains("is-active"));
	assert_eq!(link.get_attribute("aria-current").as_deref(), Some("page"));
	assert_eq!(query_all(&root, "[data-nav-link].is-active").len(), 1);
	assert_eq!(query_all(&root, "[aria-current]").len(), 1);
	assert!(link.closest(".site-nav__item").unwrap().unwrap().class_list().contains("is-active"));
	assert!(query_all(&root, ".is-open").is_empty());
}

#[wasm_bindgen_test]
fn nested_active_link_opens_its_group() {
	init_logging();
	let root = mount(&render::fragment(&site()));

	decorate(&root, "ai-research-assistants.html", &NavConfig::default());

	let link = query(&root, r#"a[href="ai-research-assistants.html"]"#);
	let subitem = link.closest(".site-nav__subitem").unwrap().unwrap();
	let group = link.closest(".site-nav__item--has-children").unwrap().unwrap();
	assert!(subitem.class_list().contains("is-active"));
	assert!(group.class_list().contains("is-active"));
	assert!(is_open(&group));
	assert_eq!(query(&group, ".site-nav__toggle").get_attribute("aria-expanded").as_deref(), Some("true"));
	assert!(!query(&group, ".site-nav__sublist").has_attribute("hidden"));

	for other in query_all(&root, ".site-nav__item--has-children") {
		if other == group {
			continue;
		}
		assert!(!is_open(&other));
		assert!(query(&other, ".site-nav__sublist").has_attribute("hidden"));
		assert_eq!(query(&other, ".site-nav__toggle").get_attribute("aria-expanded").as_deref(), Some("false"));
	}
}

#[wasm_bindgen_test]
fn no_match_leaves_everything_closed() {
	init_logging();
	let root = mount(&render::fragment(&site()));

	let decoration = decorate(&root, "elsewhere.html", &NavConfig::default());
	assert!(decoration.report.matched.is_empty());
	assert_eq!(decoration.attached, 3);
	assert!(query_all(&root, ".is-active").is_empty());
	assert_eq!(query_all(&root, ".site-nav__sublist[hidden]").len(), 3);
}

#[wasm_bindgen_test]
fn toggles_are_isolated_and_round_trip() {
	init_logging();
	let root = mount(&render::fragment(&site()));
	decorate(&root, "index.html", &NavConfig::default());

	let groups = query_all(&root, ".site-nav__item--has-children");
	let before: Vec<String> = groups.iter().map(|group| group.outer_html()).collect();
	let toggle = query(&groups[1], ".site-nav__toggle");

	click(&toggle);
	assert!(is_open(&groups[1]));
	assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
	assert!(!query(&groups[1], ".site-nav__sublist").has_attribute("hidden"));
	assert_eq!(groups[0].outer_html(), before[0]);
	assert_eq!(groups[2].outer_html(), before[2]);

	click(&toggle);
	let after: Vec<String> = groups.iter().map(|group| group.outer_html()).collect();
	assert_eq!(after, before);
}

#[wasm_bindgen_test]
fn auto_expanded_group_can_be_closed() {
	init_logging();
	let root = mount(&render::fragment(&site()));
	decorate(&root, "gen-ai-fundamentals.html", &NavConfig::default());

	let group = query(&root, r#"a[href="gen-ai-fundamentals.html"]"#).closest(".site-nav__item--has-children").unwrap().unwrap();
	assert!(is_open(&group));

	click(&query(&group, ".site-nav__toggle"));
	assert!(!is_open(&group));
	assert!(query(&group, ".site-nav__sublist").has_attribute("hidden"));
	assert_eq!(query(&group, ".site-nav__toggle").get_attribute("aria-expanded").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn marking_alone_attaches_nothing() {
	init_logging();
	let root = mount(&render::fragment(&site()));
	let report = mark_active_link(&root, "ai-s-jagged-frontier.html?ref=home", &NavConfig::default());
	assert!(report.matched.is_empty());

	let report = mark_active_link(&root, "ais-jagged-frontier.html?ref=home", &NavConfig::default());
	assert_eq!(report.matched.len(), 1);
	let group = query(&root, ".site-nav__item.is-open");

	// Marking opens the group, but syncing is left to the handler attacher.
	assert!(query(&group, ".site-nav__sublist").has_attribute("hidden"));
	click(&query(&group, ".site-nav__toggle"));
	assert!(is_open(&group));
}

#[wasm_bindgen_test]
fn sync_reflects_preset_state() {
	init_logging();
	let root = mount(concat!(
		r#"<li class="site-nav__item site-nav__item--has-children is-open">"#,
		r#"<a data-nav-link href="a.html">A</a>"#,
		r#"<button class="site-nav__toggle" aria-expanded="false"></button>"#,
		r#"<ul class="site-nav__sublist" hidden><li class="site-nav__subitem"><a data-nav-link href="b.html">B</a></li></ul>"#,
		"</li>",
	));
	let group = query(&root, ".site-nav__item");

	sync_toggle_state(&group, &NavConfig::default());
	assert_eq!(query(&group, ".site-nav__toggle").get_attribute("aria-expanded").as_deref(), Some("true"));
	assert!(!query(&group, ".site-nav__sublist").has_attribute("hidden"));

	let html = root.inner_html();
	sync_toggle_state(&query(&group, "a"), &NavConfig::default());
	assert_eq!(root.inner_html(), html);
}

#[wasm_bindgen_test]
fn groups_without_toggle_are_skipped() {
	init_logging();
	let root = mount(concat!(
		r#"<ul class="site-nav__list">"#,
		r#"<li class="site-nav__item site-nav__item--has-children">"#,
		r#"<a data-nav-link href="a.html">A</a>"#,
		r#"<ul class="site-nav__sublist"><li class="site-nav__subitem"><a data-nav-link href="b.html">B</a></li></ul>"#,
		"</li>",
		r#"<li class="site-nav__item site-nav__item--has-children">"#,
		r#"<a data-nav-link href="c.html">C</a>"#,
		r#"<button class="site-nav__toggle"></button>"#,
		r#"<ul class="site-nav__sublist"><li class="site-nav__subitem"><a data-nav-link href="d.html">D</a></li></ul>"#,
		"</li></ul>",
	));

	assert_eq!(attach_toggle_handlers(&root, &NavConfig::default()), 1);

	// Both groups are synced to closed, even the one that can't be toggled.
	assert_eq!(query_all(&root, ".site-nav__sublist[hidden]").len(), 2);
	assert_eq!(query(&root, ".site-nav__toggle").get_attribute("aria-expanded").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn loaded_nav_changes_reach_the_dom() {
	init_logging();
	let root = mount(&render::fragment(&site()));
	let config = NavConfig::default();
	let mut loaded = load_nav(&root, &config);

	let report = loaded.mark_active("/docs/ai-contribution-statement.html", &config);
	let link = loaded.element(report.matched[0]);
	assert_eq!(link.get_attribute("href").as_deref(), Some("ai-contribution-statement.html"));
	assert_eq!(link.get_attribute("aria-current").as_deref(), Some("page"));

	let group = loaded.tree().groups().next().unwrap();
	let synced = loaded.apply(Command::Toggle(group), &config).unwrap();
	assert!(is_open(loaded.element(group)));
	assert_eq!(loaded.element(synced.toggle.unwrap()).get_attribute("aria-expanded").as_deref(), Some("true"));
	assert!(!loaded.element(synced.sublist.unwrap()).has_attribute("hidden"));

	assert_eq!(loaded.apply(Command::Toggle(report.matched[0]), &config), None);
}

#[wasm_bindgen_test]
fn full_location_path_names_mark_the_page() {
	init_logging();
	let root = mount(&render::fragment(&site()));

	let decoration = decorate(&root, "/docs/gen-ai-fundamentals.html", &NavConfig::default());
	assert_eq!(decoration.report.matched.len(), 1);
	assert_eq!(query(&root, r#"a[href="gen-ai-fundamentals.html"]"#).get_attribute("aria-current").as_deref(), Some("page"));
	assert!(is_open(&query(&root, ".site-nav__item.is-open")));
}
