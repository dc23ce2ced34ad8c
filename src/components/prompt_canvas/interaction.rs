//! Pointer gesture state machine.
//!
//! ```text
//! Idle -> DraggingNode   (press on a node body)
//! Idle -> Panning        (press on the empty canvas)
//! Any  -> Idle           (release or pointer leave)
//! ```
//!
//! Presses on a node's text area never start a gesture. A press while a
//! gesture is already active is ignored. The pan offset survives the end of
//! a pan gesture.

use log::debug;

use super::geometry::Point;
use super::graph::PromptGraph;
use super::types::NodeId;

/// What a pointer press landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressTarget {
	Node(NodeId),
	/// The text editing control inside a node.
	TextControl(NodeId),
	Background,
}

impl PressTarget {
	/// Classifies a press from the DOM: the node card it bubbled through (if
	/// any), the tag name of the element actually hit, and whether that
	/// element is the canvas itself.
	pub fn classify(node: Option<NodeId>, tag_name: &str, is_canvas: bool) -> Option<Self> {
		match node {
			Some(id) if tag_name.eq_ignore_ascii_case("textarea") => Some(Self::TextControl(id)),
			Some(id) => Some(Self::Node(id)),
			None if is_canvas => Some(Self::Background),
			None => None,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
	#[default]
	Idle,
	DraggingNode {
		node: NodeId,
		/// Pointer position relative to the node's screen position at press.
		grab_offset: Point,
	},
	Panning {
		/// Pointer position minus the pan offset at press.
		origin: Point,
	},
}

#[derive(Clone, Debug, Default)]
pub struct GestureController {
	gesture: Gesture,
	pan_offset: Point,
}

impl GestureController {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn gesture(&self) -> Gesture {
		self.gesture
	}

	pub fn is_idle(&self) -> bool {
		self.gesture == Gesture::Idle
	}

	pub fn active_drag_node(&self) -> Option<NodeId> {
		match self.gesture {
			Gesture::DraggingNode { node, .. } => Some(node),
			_ => None,
		}
	}

	pub fn drag_grab_offset(&self) -> Option<Point> {
		match self.gesture {
			Gesture::DraggingNode { grab_offset, .. } => Some(grab_offset),
			_ => None,
		}
	}

	pub fn is_panning(&self) -> bool {
		matches!(self.gesture, Gesture::Panning { .. })
	}

	pub fn pan_gesture_origin(&self) -> Option<Point> {
		match self.gesture {
			Gesture::Panning { origin } => Some(origin),
			_ => None,
		}
	}

	pub fn pan_offset(&self) -> Point {
		self.pan_offset
	}

	/// Starts a drag or pan if nothing is active. Returns whether a gesture
	/// was started.
	pub fn press(&mut self, target: PressTarget, pointer: Point, graph: &PromptGraph) -> bool {
		if !self.is_idle() {
			debug!("press ignored, {:?} already active", self.gesture);
			return false;
		}

		match target {
			PressTarget::Node(id) => {
				let Some(node) = graph.node(id) else {
					return false;
				};
				self.gesture = Gesture::DraggingNode {
					node: id,
					grab_offset: pointer - (node.position + self.pan_offset),
				};
			}
			PressTarget::Background => {
				self.gesture = Gesture::Panning {
					origin: pointer - self.pan_offset,
				};
			}
			PressTarget::TextControl(_) => return false,
		}
		debug!("gesture started: {:?}", self.gesture);
		true
	}

	/// Tracks the pointer: moves the dragged node or updates the pan offset.
	pub fn pointer_move(&mut self, pointer: Point, graph: &mut PromptGraph) {
		match self.gesture {
			Gesture::DraggingNode { node, grab_offset } => {
				graph.set_position(node, pointer - grab_offset - self.pan_offset);
			}
			Gesture::Panning { origin } => {
				self.pan_offset = pointer - origin;
			}
			Gesture::Idle => {}
		}
	}

	pub fn release(&mut self) {
		if !self.is_idle() {
			debug!("gesture ended: {:?}", self.gesture);
		}
		self.gesture = Gesture::Idle;
	}

	/// Pointer left the canvas; ends the gesture like a release.
	pub fn leave(&mut self) {
		self.release();
	}
}
