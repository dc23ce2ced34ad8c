//! Prompt tree store.
//!
//! `PromptGraph` is the sole owner of the node and connection collections.
//! Every mutation goes through one of its methods, and every method addressed
//! to an unknown node is a silent no-op. The node set and connection set
//! always form a single rooted tree.

use std::collections::{BTreeMap, HashMap, HashSet};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::geometry::Point;
use super::types::{Connection, NodeId, PromptNode};

/// Where the root node is placed when the canvas starts.
pub const ROOT_POSITION: Point = Point::new(400.0, 300.0);
/// Horizontal distance between a parent and a freshly created branch.
pub const BRANCH_OFFSET_X: f64 = 250.0;
/// Half-width of the vertical band a new branch is scattered within.
pub const BRANCH_JITTER_Y: f64 = 50.0;

pub struct PromptGraph {
	nodes: BTreeMap<NodeId, PromptNode>,
	connections: Vec<Connection>,
	root: Option<NodeId>,
	next_id: u64,
	jitter: StdRng,
}

impl Default for PromptGraph {
	fn default() -> Self {
		Self::new()
	}
}

impl PromptGraph {
	pub fn new() -> Self {
		Self::with_rng(StdRng::from_entropy())
	}

	/// A store whose branch placement is reproducible.
	pub fn with_seed(seed: u64) -> Self {
		Self::with_rng(StdRng::seed_from_u64(seed))
	}

	fn with_rng(jitter: StdRng) -> Self {
		Self {
			nodes: BTreeMap::new(),
			connections: Vec::new(),
			root: None,
			next_id: 1,
			jitter,
		}
	}

	fn allocate_id(&mut self) -> NodeId {
		let id = NodeId(self.next_id);
		self.next_id += 1;
		id
	}

	/// Creates the root node. Called once, when the canvas is initialised.
	pub fn create_root(&mut self, position: Point) -> NodeId {
		let id = self.allocate_id();
		self.nodes.insert(
			id,
			PromptNode {
				id,
				position,
				text: String::new(),
				parent: None,
			},
		);
		self.root = Some(id);
		debug!("created root node {id} at ({}, {})", position.x, position.y);
		id
	}

	/// Adds a child of `parent`, placed to its right with a random vertical
	/// offset, together with its connection.
	pub fn create_branch(&mut self, parent: NodeId) -> Option<NodeId> {
		let Some(origin) = self.nodes.get(&parent).map(|n| n.position) else {
			debug!("create_branch: unknown parent {parent}");
			return None;
		};

		let id = self.allocate_id();
		let dy = self.jitter.gen_range(-BRANCH_JITTER_Y..BRANCH_JITTER_Y);
		let position = origin + Point::new(BRANCH_OFFSET_X, dy);

		self.nodes.insert(
			id,
			PromptNode {
				id,
				position,
				text: String::new(),
				parent: Some(parent),
			},
		);
		self.connections.push(Connection {
			from: parent,
			to: id,
		});
		info!("branched node {id} from {parent}");
		Some(id)
	}

	pub fn update_text(&mut self, id: NodeId, text: impl Into<String>) -> bool {
		match self.nodes.get_mut(&id) {
			Some(node) => {
				node.text = text.into();
				true
			}
			None => {
				debug!("update_text: unknown node {id}");
				false
			}
		}
	}

	/// Moves a node. Runs on every pointer move during a drag.
	pub fn set_position(&mut self, id: NodeId, position: Point) -> bool {
		match self.nodes.get_mut(&id) {
			Some(node) => {
				node.position = position;
				true
			}
			None => false,
		}
	}

	/// Removes `id` and all of its descendants at any depth, plus every
	/// connection touching a removed node. The root cannot be deleted.
	pub fn delete_subtree(&mut self, id: NodeId) -> bool {
		if self.root == Some(id) {
			debug!("delete_subtree: refusing to delete root {id}");
			return false;
		}
		if !self.nodes.contains_key(&id) {
			debug!("delete_subtree: unknown node {id}");
			return false;
		}

		let doomed: HashSet<NodeId> = std::iter::once(id).chain(self.descendants(id)).collect();
		self.nodes.retain(|node_id, _| !doomed.contains(node_id));
		self.connections
			.retain(|c| !doomed.contains(&c.from) && !doomed.contains(&c.to));
		info!(
			"deleted node {id} and {} descendant(s), {} node(s) remain",
			doomed.len() - 1,
			self.node_count()
		);
		true
	}

	/// All transitive descendants of `id`, excluding `id` itself.
	///
	/// Iterative depth-first walk over a child index built from parent links,
	/// so cost is linear in the node count and stack use is constant.
	pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
		let mut children: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
		for node in self.nodes.values() {
			if let Some(parent) = node.parent {
				children.entry(parent).or_default().push(node.id);
			}
		}

		let mut found = Vec::new();
		let mut stack = vec![id];
		while let Some(current) = stack.pop() {
			if let Some(kids) = children.get(&current) {
				found.extend_from_slice(kids);
				stack.extend_from_slice(kids);
			}
		}
		found
	}

	pub fn root_id(&self) -> Option<NodeId> {
		self.root
	}

	pub fn node(&self, id: NodeId) -> Option<&PromptNode> {
		self.nodes.get(&id)
	}

	/// Nodes in creation order.
	pub fn nodes(&self) -> impl Iterator<Item = &PromptNode> {
		self.nodes.values()
	}

	pub fn node_ids(&self) -> Vec<NodeId> {
		self.nodes.keys().copied().collect()
	}

	pub fn connections(&self) -> &[Connection] {
		&self.connections
	}

	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}
}
