//! Addressing and querying nodes inside a page tree.

use super::{Page, PageElement};

/// Position of a node as child indices from the root.
///
/// The empty path addresses the root itself. Paths stay valid as long as no
/// ancestor on the path has its children replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
	/// The path of the root node.
	pub fn root() -> Self {
		Self(Vec::new())
	}

	/// The path of this node's `index`-th child.
	pub fn child(&self, index: usize) -> Self {
		let mut indices = self.0.clone();
		indices.push(index);
		Self(indices)
	}

	/// Appends a path relative to this one.
	pub fn join(&self, relative: &NodePath) -> Self {
		let mut indices = self.0.clone();
		indices.extend_from_slice(&relative.0);
		Self(indices)
	}

	/// Child indices from the root.
	pub fn indices(&self) -> &[usize] {
		&self.0
	}

	/// Whether `self` is a strict ancestor of `other`.
	pub fn is_ancestor_of(&self, other: &NodePath) -> bool {
		self.0.len() < other.0.len() && other.0.starts_with(&self.0)
	}
}

impl From<Vec<usize>> for NodePath {
	fn from(indices: Vec<usize>) -> Self {
		Self(indices)
	}
}

impl Page {
	/// Returns the node at `path`.
	pub fn node_at(&self, path: &NodePath) -> Option<&Page> {
		let mut node = self;
		for &index in path.indices() {
			node = node.child_nodes().get(index)?;
		}
		Some(node)
	}

	/// Returns the node at `path` mutably.
	pub fn node_at_mut(&mut self, path: &NodePath) -> Option<&mut Page> {
		let mut node = self;
		for &index in path.indices() {
			node = node.child_nodes_mut()?.get_mut(index)?;
		}
		Some(node)
	}

	/// Returns the element at `path`.
	pub fn element_at(&self, path: &NodePath) -> Option<&PageElement> {
		self.node_at(path).and_then(Page::as_element)
	}

	/// Returns the element at `path` mutably.
	pub fn element_at_mut(&mut self, path: &NodePath) -> Option<&mut PageElement> {
		self.node_at_mut(path).and_then(Page::as_element_mut)
	}

	/// Paths of all elements matching `pred`, in document order.
	///
	/// The root itself is included when it is a matching element.
	pub fn find_elements(&self, pred: impl Fn(&PageElement) -> bool) -> Vec<NodePath> {
		let mut found = Vec::new();
		let mut current = Vec::new();
		self.find_elements_inner(&pred, &mut current, &mut found, false);
		found
	}

	/// Path of the first element matching `pred`, in document order.
	pub fn find_element(&self, pred: impl Fn(&PageElement) -> bool) -> Option<NodePath> {
		let mut found = Vec::new();
		let mut current = Vec::new();
		self.find_elements_inner(&pred, &mut current, &mut found, true);
		found.into_iter().next()
	}

	/// Path of the first matching element strictly below `path`.
	pub fn find_descendant(
		&self,
		path: &NodePath,
		pred: impl Fn(&PageElement) -> bool,
	) -> Option<NodePath> {
		let node = self.node_at(path)?;
		node.child_nodes().iter().enumerate().find_map(|(index, child)| {
			child
				.find_element(&pred)
				.map(|relative| path.child(index).join(&relative))
		})
	}

	fn find_elements_inner(
		&self,
		pred: &impl Fn(&PageElement) -> bool,
		current: &mut Vec<usize>,
		found: &mut Vec<NodePath>,
		first_only: bool,
	) -> bool {
		if let Page::Element(el) = self
			&& pred(el)
		{
			found.push(NodePath(current.clone()));
			if first_only {
				return true;
			}
		}
		for (index, child) in self.child_nodes().iter().enumerate() {
			current.push(index);
			let done = child.find_elements_inner(pred, current, found, first_only);
			current.pop();
			if done {
				return true;
			}
		}
		false
	}
}
