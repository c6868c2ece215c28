//! Reads an injected navigation subtree into a [`NavTree`] and writes model state back onto it.

use crate::{
	error::js_message,
	tree::{Command, MarkReport, Marks, NavTree, NodeId, NodeState, Synced},
	NavConfig,
};
use tracing::{error, instrument, trace};
use wasm_bindgen::JsValue;
use web_sys::{DomTokenList, Element};

/// A [`NavTree`] together with the element each of its nodes was loaded from.
///
/// The model can only be changed through methods that also project the change, so it never drifts from its elements.
#[derive(Debug, Default)]
pub struct LoadedNav {
	tree: NavTree,
	elements: Vec<Element>,
}

impl LoadedNav {
	#[must_use]
	pub fn tree(&self) -> &NavTree {
		&self.tree
	}

	/// [`NavTree::mark_active`], then projects every node.
	pub fn mark_active(&mut self, current: &str, config: &NavConfig) -> MarkReport {
		let report = self.tree.mark_active(current);
		self.project_all(config);
		report
	}

	/// [`NavTree::sync_group`], then projects the group and the nodes it wrote.
	pub fn sync_group(&mut self, group: NodeId, config: &NavConfig) -> Synced {
		let synced = self.tree.sync_group(group);
		self.project_synced(group, synced, config);
		synced
	}

	/// [`NavTree::apply`], then projects whatever changed.
	pub fn apply(&mut self, command: Command, config: &NavConfig) -> Option<Synced> {
		let synced = self.tree.apply(command)?;
		let (Command::Toggle(group) | Command::Open(group)) = command;
		self.project_synced(group, synced, config);
		Some(synced)
	}

	fn project_synced(&self, group: NodeId, synced: Synced, config: &NavConfig) {
		self.project(group, config);
		for id in [synced.toggle, synced.sublist].into_iter().flatten() {
			self.project(id, config);
		}
	}

	/// # Panics
	///
	/// Iff `id` belongs to another tree.
	#[must_use]
	pub fn element(&self, id: NodeId) -> &Element {
		&self.elements[id.index()]
	}

	/// Writes the modeled state of `id` onto its element.
	///
	/// Projection is idempotent, and a node that hasn't changed since it was loaded projects to its current markup.
	pub fn project(&self, id: NodeId, config: &NavConfig) {
		let node = self.tree.node(id);
		let element = self.element(id);
		let class_list = element.class_list();

		set_class(&class_list, config.active_class, node.state.active);
		if node.marks.link {
			if node.state.current {
				report(element.set_attribute(config.current_attribute, config.current_value), "set current page attribute");
			} else if element.get_attribute(config.current_attribute).as_deref() == Some(config.current_value) {
				report(element.remove_attribute(config.current_attribute), "remove current page attribute");
			}
		}
		if node.marks.group {
			set_class(&class_list, config.open_class, node.state.open);
		}
		if node.marks.toggle {
			if let Some(expanded) = node.state.expanded {
				report(element.set_attribute(config.expanded_attribute, if expanded { "true" } else { "false" }), "set expanded attribute");
			}
		}
		if node.marks.sublist {
			if node.state.hidden {
				report(element.set_attribute(config.hidden_attribute, ""), "hide sublist");
			} else {
				report(element.remove_attribute(config.hidden_attribute), "show sublist");
			}
		}
	}

	pub fn project_all(&self, config: &NavConfig) {
		for id in self.tree.ids() {
			self.project(id, config);
		}
	}
}

/// Loads the navigation below `root`, not including `root` itself.
#[must_use]
#[instrument(skip(root))]
pub fn load_nav(root: &Element, config: &NavConfig) -> LoadedNav {
	let mut loaded = LoadedNav::default();
	load_children(root, None, config, &mut loaded);
	trace!(nodes = loaded.tree.len(), "Loaded navigation.");
	loaded
}

/// Loads `element` and everything below it.
#[must_use]
#[instrument(skip(element))]
pub fn load_subtree(element: &Element, config: &NavConfig) -> LoadedNav {
	let mut loaded = LoadedNav::default();
	let id = load_element(element, None, config, &mut loaded);
	load_children(element, id, config, &mut loaded);
	loaded
}

fn load_children(parent_element: &Element, parent: Option<NodeId>, config: &NavConfig, loaded: &mut LoadedNav) {
	let children = parent_element.children();
	for i in 0..children.length() {
		let Some(child) = children.item(i) else {
			error!("Child {} vanished during loading.", i);
			continue;
		};
		let id = load_element(&child, parent, config, loaded);
		load_children(&child, id.or(parent), config, loaded);
	}
}

/// Adds `element` to `loaded` if it plays any part in navigation.
pub fn load_element(element: &Element, parent: Option<NodeId>, config: &NavConfig, loaded: &mut LoadedNav) -> Option<NodeId> {
	let class_list = element.class_list();
	let marks = Marks {
		item: class_list.contains(config.item_class),
		subitem: class_list.contains(config.subitem_class),
		group: class_list.contains(config.group_class),
		link: element.has_attribute(config.link_attribute),
		toggle: class_list.contains(config.toggle_class),
		sublist: class_list.contains(config.sublist_class),
	};
	if marks.is_empty() {
		return None;
	}

	let href = if marks.link { element.get_attribute("href") } else { None };
	let state = load_state(element, &class_list, config);
	let id = loaded.tree.push(parent, marks, href, state);
	loaded.elements.push(element.clone());
	Some(id)
}

#[must_use]
pub fn load_state(element: &Element, class_list: &DomTokenList, config: &NavConfig) -> NodeState {
	NodeState {
		active: class_list.contains(config.active_class),
		current: element.get_attribute(config.current_attribute).as_deref() == Some(config.current_value),
		open: class_list.contains(config.open_class),
		hidden: element.has_attribute(config.hidden_attribute),
		expanded: element.get_attribute(config.expanded_attribute).map(|value| value == "true"),
	}
}

fn set_class(class_list: &DomTokenList, class: &str, on: bool) {
	report(class_list.toggle_with_force(class, on).map(drop), "toggle class");
}

fn report(result: Result<(), JsValue>, what: &str) {
	if let Err(error) = result {
		error!("Failed to {}: {}", what, js_message(&error));
	}
}
