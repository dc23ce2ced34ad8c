use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::geometry::Point;

/// Opaque node identifier, allocated by the graph store and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u64);

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for NodeId {
	type Err = ParseIntError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.parse().map(NodeId)
	}
}

/// A single prompt fragment on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct PromptNode {
	pub id: NodeId,
	/// Canvas-space position, before the pan offset is applied.
	pub position: Point,
	pub text: String,
	pub parent: Option<NodeId>,
}

impl PromptNode {
	pub fn is_root(&self) -> bool {
		self.parent.is_none()
	}
}

/// Directed parent -> child edge, created together with the child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connection {
	pub from: NodeId,
	pub to: NodeId,
}
