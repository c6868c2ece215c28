//! Decoration of injected navigation markup: active link marking and collapsible groups.

use crate::{
	error::js_message,
	load::{load_nav, load_subtree, LoadedNav},
	tree::{Command, MarkReport, NodeId},
	NavConfig,
};
use std::{cell::RefCell, rc::Rc};
use tracing::{debug, error, instrument, trace, trace_span, warn};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Element;

/// What [`decorate`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoration {
	pub report: MarkReport,
	/// How many groups received a click handler.
	pub attached: usize,
}

/// Marks links to `current_path` below `root` active and opens the group revealing the last of them.
///
/// `current_path` is normalized before comparison, so a full location path name works as well as a bare page name.
#[instrument(skip(root, current_path))]
pub fn mark_active_link(root: &Element, current_path: &str, config: &NavConfig) -> MarkReport {
	let mut loaded = load_nav(root, config);
	mark(&mut loaded, current_path, config)
}

/// Reflects `group`'s open class onto its toggle's `aria-expanded` and its sublist's `hidden` attribute.
#[instrument(skip(group))]
pub fn sync_toggle_state(group: &Element, config: &NavConfig) {
	if !group.class_list().contains(config.group_class) {
		return warn!("Not a collapsible group: {:?}", group);
	}
	let mut loaded = load_subtree(group, config);
	if let Some(root) = loaded.tree().ids().next() {
		loaded.sync_group(root, config);
	}
}

/// Syncs every group below `root` and wires each group's toggle to flip it when clicked.
///
/// Groups without a toggle are synced but stay static. Handlers live as long as the page.
/// Calling this twice on the same markup attaches a second, independent set of handlers. This isn't guarded against.
#[instrument(skip(root))]
pub fn attach_toggle_handlers(root: &Element, config: &NavConfig) -> usize {
	attach(Rc::new(RefCell::new(load_nav(root, config))), config)
}

/// Marks the active link, then attaches toggle handlers, so that auto-expansion shows in each group's initial state.
#[instrument(skip(root, current_path))]
pub fn decorate(root: &Element, current_path: &str, config: &NavConfig) -> Decoration {
	let mut loaded = load_nav(root, config);
	let report = mark(&mut loaded, current_path, config);
	let attached = attach(Rc::new(RefCell::new(loaded)), config);
	debug!(matched = report.matched.len(), attached, "Decorated navigation.");
	Decoration { report, attached }
}

fn mark(loaded: &mut LoadedNav, current_path: &str, config: &NavConfig) -> MarkReport {
	let report = loaded.mark_active(current_path, config);
	if cfg!(feature = "dangerous-logging") {
		debug!(current_path, hrefs = ?loaded.tree().hrefs(&report.matched), "Marked active links.");
	}
	report
}

fn attach(shared: Rc<RefCell<LoadedNav>>, config: &NavConfig) -> usize {
	let groups: Vec<NodeId> = shared.borrow().tree().groups().collect();
	let mut attached = 0;
	for group in groups {
		let toggle = {
			let mut loaded = shared.borrow_mut();
			loaded.sync_group(group, config);
			loaded.tree().toggle_of(group).map(|toggle| loaded.element(toggle).clone())
		};
		let Some(toggle) = toggle else {
			trace!(?group, "Group has no toggle.");
			continue;
		};

		let handler = {
			let shared = Rc::clone(&shared);
			let config = *config;
			Closure::<dyn FnMut()>::new(move || {
				let span = trace_span!("toggle", ?group);
				let _enter = span.enter();
				let Ok(mut loaded) = shared.try_borrow_mut() else {
					return error!("Re-entrant toggle ignored.");
				};
				loaded.apply(Command::Toggle(group), &config);
			})
		};
		if let Err(error) = toggle.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref()) {
			error!("Failed to attach toggle handler: {}", js_message(&error));
			continue;
		}
		handler.forget();
		attached += 1;
	}
	attached
}
