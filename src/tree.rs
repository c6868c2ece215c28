//! An explicit model of an injected navigation tree.
//!
//! Only the elements that matter to navigation are modeled (items, subitems, groups, links, toggles and sublists),
//! each pointing at its closest modeled ancestor. Nodes are stored in document order.
//!
//! Marking and toggling happen here, on plain data. [`crate::load::LoadedNav`] projects the result onto the DOM afterwards.

use crate::{path, site::Page};
use tracing::{trace, trace_span, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);
impl NodeId {
	#[must_use]
	pub fn index(self) -> usize {
		self.0
	}
}

/// What an element is, according to its classes and attributes.
///
/// These are independent flags, since one element can play more than one part.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Marks {
	pub item: bool,
	pub subitem: bool,
	/// A collapsible group, i.e. an item with children.
	pub group: bool,
	pub link: bool,
	pub toggle: bool,
	pub sublist: bool,
}
impl Marks {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeState {
	pub active: bool,
	/// Whether this is a link to the current page.
	pub current: bool,
	pub open: bool,
	pub hidden: bool,
	/// `aria-expanded`, where present.
	pub expanded: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavNode {
	pub parent: Option<NodeId>,
	pub marks: Marks,
	/// The raw link target. Only meaningful on links.
	pub href: Option<String>,
	pub state: NodeState,
}

/// Requests that change a [`NavTree`] after it has been decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
	/// Flip a group between open and closed.
	Toggle(NodeId),
	Open(NodeId),
}

/// The outcome of [`NavTree::mark_active`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkReport {
	/// Links to the current page, in document order.
	pub matched: Vec<NodeId>,
	/// The group that was opened to reveal the active link, if any.
	pub expanded: Option<NodeId>,
}

/// The nodes written by [`NavTree::sync_group`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Synced {
	pub toggle: Option<NodeId>,
	pub sublist: Option<NodeId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavTree {
	nodes: Vec<NavNode>,
}

impl NavTree {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a node after all existing ones, so nodes must be pushed in document order.
	///
	/// # Panics
	///
	/// Iff `parent` isn't a node of this tree.
	pub fn push(&mut self, parent: Option<NodeId>, marks: Marks, href: Option<String>, state: NodeState) -> NodeId {
		if let Some(parent) = parent {
			assert!(parent.0 < self.nodes.len(), "Parent {:?} not found in tree of {} nodes.", parent, self.nodes.len());
		}
		self.nodes.push(NavNode { parent, marks, href, state });
		NodeId(self.nodes.len() - 1)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// # Panics
	///
	/// Iff `id` belongs to another tree.
	#[must_use]
	pub fn node(&self, id: NodeId) -> &NavNode {
		&self.nodes[id.0]
	}

	pub fn ids(&self) -> impl Iterator<Item = NodeId> {
		(0..self.nodes.len()).map(NodeId)
	}

	/// Like the DOM's `closest`, `id` itself is considered first.
	pub fn closest(&self, id: NodeId, predicate: impl Fn(&Marks) -> bool) -> Option<NodeId> {
		let mut current = Some(id);
		while let Some(id) = current {
			let node = self.node(id);
			if predicate(&node.marks) {
				return Some(id);
			}
			current = node.parent;
		}
		None
	}

	#[must_use]
	pub fn is_descendant(&self, id: NodeId, of: NodeId) -> bool {
		let mut current = self.node(id).parent;
		while let Some(parent) = current {
			if parent == of {
				return true;
			}
			current = self.node(parent).parent;
		}
		false
	}

	/// The first strict descendant of `of` in document order that matches, like `querySelector` on an element.
	pub fn first_descendant(&self, of: NodeId, predicate: impl Fn(&Marks) -> bool) -> Option<NodeId> {
		self.ids().skip(of.0 + 1).find(|&id| predicate(&self.node(id).marks) && self.is_descendant(id, of))
	}

	pub fn links(&self) -> impl Iterator<Item = NodeId> + '_ {
		self.ids().filter(move |&id| self.node(id).marks.link)
	}

	pub fn groups(&self) -> impl Iterator<Item = NodeId> + '_ {
		self.ids().filter(move |&id| self.node(id).marks.group)
	}

	/// The raw targets of `links`, skipping links without one.
	#[must_use]
	pub fn hrefs(&self, links: &[NodeId]) -> Vec<&str> {
		links.iter().filter_map(|&link| self.node(link).href.as_deref()).collect()
	}

	#[must_use]
	pub fn toggle_of(&self, group: NodeId) -> Option<NodeId> {
		self.first_descendant(group, |marks| marks.toggle)
	}

	#[must_use]
	pub fn sublist_of(&self, group: NodeId) -> Option<NodeId> {
		self.first_descendant(group, |marks| marks.sublist)
	}

	/// Marks every link to `current` (and its enclosing subitem and item) active,
	/// then opens the group revealing the last such link.
	///
	/// `current` may be a bare page name or a full location path name. Only its last segment is compared.
	///
	/// A matched link's item is opened if it is a group itself, otherwise the link's closest group is.
	/// Links outside of any item are marked but never cause a group to open.
	pub fn mark_active(&mut self, current: &str) -> MarkReport {
		let current = path::current_page(current).to_owned();
		let span = trace_span!("mark_active", links = self.links().count());
		let _enter = span.enter();

		let matched: Vec<NodeId> = self.links().filter(|&link| path::normalize(self.node(link).href.as_deref()) == current).collect();

		let mut expanded = None;
		for &link in &matched {
			let state = &mut self.nodes[link.0].state;
			state.active = true;
			state.current = true;

			if let Some(subitem) = self.closest(link, |marks| marks.subitem) {
				self.nodes[subitem.0].state.active = true;
			}
			if let Some(item) = self.closest(link, |marks| marks.item) {
				self.nodes[item.0].state.active = true;
				if self.node(item).marks.group {
					expanded = Some(item);
				} else if let Some(group) = self.closest(link, |marks| marks.group) {
					expanded = Some(group);
				}
			}
		}

		if let Some(group) = expanded {
			self.nodes[group.0].state.open = true;
		}
		trace!(matched = matched.len(), ?expanded, "Marked active links.");
		MarkReport { matched, expanded }
	}

	/// Projects a group's open state onto its toggle's `aria-expanded` and its sublist's visibility.
	pub fn sync_group(&mut self, group: NodeId) -> Synced {
		let open = self.node(group).state.open;
		let synced = Synced {
			toggle: self.toggle_of(group),
			sublist: self.sublist_of(group),
		};
		if let Some(toggle) = synced.toggle {
			self.nodes[toggle.0].state.expanded = Some(open);
		}
		if let Some(sublist) = synced.sublist {
			self.nodes[sublist.0].state.hidden = !open;
		}
		synced
	}

	/// Applies `command` and re-syncs the affected group.
	///
	/// Returns [`None`] iff the command doesn't target a group, in which case nothing changes.
	pub fn apply(&mut self, command: Command) -> Option<Synced> {
		let (Command::Toggle(group) | Command::Open(group)) = command;
		if !self.node(group).marks.group {
			warn!(?command, "Ignoring command for a node that isn't a collapsible group.");
			return None;
		}

		let state = &mut self.nodes[group.0].state;
		match command {
			Command::Toggle(_) => state.open = !state.open,
			Command::Open(_) => state.open = true,
		}
		Some(self.sync_group(group))
	}

	/// The model of [`crate::render::fragment`]'s output for `pages`.
	#[must_use]
	pub fn from_pages(pages: &[Page]) -> Self {
		let mut tree = Self::new();
		for page in pages {
			tree.push_page(None, page, Marks { item: true, ..Marks::default() });
		}
		tree
	}

	fn push_page(&mut self, parent: Option<NodeId>, page: &Page, wrapper: Marks) {
		let group = page.has_children();
		let wrapper = self.push(parent, Marks { group, ..wrapper }, None, NodeState::default());
		self.push(Some(wrapper), Marks { link: true, ..Marks::default() }, Some(page.href()), NodeState::default());

		if group {
			self.push(
				Some(wrapper),
				Marks { toggle: true, ..Marks::default() },
				None,
				NodeState {
					expanded: Some(false),
					..NodeState::default()
				},
			);
			let sublist = self.push(
				Some(wrapper),
				Marks { sublist: true, ..Marks::default() },
				None,
				NodeState {
					hidden: true,
					..NodeState::default()
				},
			);
			for child in &page.children {
				self.push_page(Some(sublist), child, Marks { subitem: true, ..Marks::default() });
			}
		}
	}
}
