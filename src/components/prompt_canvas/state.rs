use super::geometry::{Point, connection_anchors, to_screen};
use super::graph::PromptGraph;
use super::interaction::{Gesture, GestureController, PressTarget};
use super::types::{Connection, NodeId};

/// A UI event, applied to [`CanvasState`] strictly in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasEvent {
	PointerDown { target: PressTarget, at: Point },
	PointerMove { at: Point },
	PointerUp,
	PointerLeave,
	TextChanged { node: NodeId, text: String },
	BranchRequested(NodeId),
	DeleteRequested(NodeId),
}

/// Connection endpoints in screen space, ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectionLine {
	pub from: NodeId,
	pub to: NodeId,
	pub start: Point,
	pub end: Point,
}

/// Everything the canvas owns: the prompt tree and the gesture state.
pub struct CanvasState {
	pub graph: PromptGraph,
	pub gestures: GestureController,
}

impl CanvasState {
	pub fn new(root_position: Point) -> Self {
		Self::with_graph(PromptGraph::new(), root_position)
	}

	pub fn with_graph(mut graph: PromptGraph, root_position: Point) -> Self {
		graph.create_root(root_position);
		Self {
			graph,
			gestures: GestureController::new(),
		}
	}

	pub fn apply(&mut self, event: CanvasEvent) {
		match event {
			CanvasEvent::PointerDown { target, at } => {
				self.gestures.press(target, at, &self.graph);
			}
			CanvasEvent::PointerMove { at } => self.gestures.pointer_move(at, &mut self.graph),
			CanvasEvent::PointerUp => self.gestures.release(),
			CanvasEvent::PointerLeave => self.gestures.leave(),
			CanvasEvent::TextChanged { node, text } => {
				self.graph.update_text(node, text);
			}
			CanvasEvent::BranchRequested(parent) => {
				self.graph.create_branch(parent);
			}
			CanvasEvent::DeleteRequested(node) => {
				self.graph.delete_subtree(node);
			}
		}
	}

	pub fn pan_offset(&self) -> Point {
		self.gestures.pan_offset()
	}

	pub fn screen_position(&self, id: NodeId) -> Option<Point> {
		self.graph
			.node(id)
			.map(|n| to_screen(n.position, self.pan_offset()))
	}

	/// CSS cursor for the canvas under the current gesture.
	pub fn cursor(&self) -> &'static str {
		match self.gestures.gesture() {
			Gesture::Idle => "grab",
			Gesture::DraggingNode { .. } => "move",
			Gesture::Panning { .. } => "grabbing",
		}
	}

	/// Screen-space line for one connection, or `None` once either end is gone.
	pub fn connection_line(&self, connection: Connection) -> Option<ConnectionLine> {
		let from = self.graph.node(connection.from)?;
		let to = self.graph.node(connection.to)?;
		let (start, end) = connection_anchors(from.position, to.position, self.pan_offset());
		Some(ConnectionLine {
			from: connection.from,
			to: connection.to,
			start,
			end,
		})
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::components::prompt_canvas::graph::ROOT_POSITION;

	fn state() -> (CanvasState, NodeId) {
		let state = CanvasState::with_graph(PromptGraph::with_seed(3), ROOT_POSITION);
		let root = state.graph.root_id().unwrap();
		(state, root)
	}

	#[test]
	fn starts_with_single_root() {
		let (state, root) = state();
		assert_eq!(state.graph.node_ids(), vec![root]);
		assert_eq!(state.screen_position(root), Some(ROOT_POSITION));
		assert!(state.graph.connections().is_empty());
	}

	#[test]
	fn event_stream_drives_graph_and_pan() {
		let (mut state, root) = state();

		state.apply(CanvasEvent::BranchRequested(root));
		let child = state.graph.node_ids()[1];
		state.apply(CanvasEvent::TextChanged {
			node: child,
			text: "rewrite as a haiku".into(),
		});

		state.apply(CanvasEvent::PointerDown {
			target: PressTarget::Background,
			at: Point::new(0.0, 0.0),
		});
		state.apply(CanvasEvent::PointerMove {
			at: Point::new(-100.0, 40.0),
		});
		state.apply(CanvasEvent::PointerUp);
		assert_eq!(state.pan_offset(), Point::new(-100.0, 40.0));
		assert_eq!(state.screen_position(root), Some(Point::new(300.0, 340.0)));

		state.apply(CanvasEvent::PointerDown {
			target: PressTarget::Node(root),
			at: Point::new(310.0, 350.0),
		});
		state.apply(CanvasEvent::PointerMove {
			at: Point::new(110.0, 150.0),
		});
		state.apply(CanvasEvent::PointerLeave);
		assert_eq!(state.graph.node(root).unwrap().position, Point::new(200.0, 100.0));
		assert!(state.gestures.is_idle());

		assert_eq!(state.graph.node(child).unwrap().text, "rewrite as a haiku");
		state.apply(CanvasEvent::DeleteRequested(child));
		assert_eq!(state.graph.node_ids(), vec![root]);
	}

	#[test]
	fn text_edits_ignore_gesture_state() {
		let (mut state, root) = state();
		state.apply(CanvasEvent::PointerDown {
			target: PressTarget::Node(root),
			at: Point::new(410.0, 310.0),
		});
		state.apply(CanvasEvent::TextChanged {
			node: root,
			text: "hello".into(),
		});
		assert_eq!(state.gestures.active_drag_node(), Some(root));
		assert_eq!(state.graph.node(root).unwrap().text, "hello");
	}

	#[test]
	fn delete_root_request_is_ignored() {
		let (mut state, root) = state();
		state.apply(CanvasEvent::DeleteRequested(root));
		assert_eq!(state.graph.node_ids(), vec![root]);
	}

	#[test]
	fn connection_lines_follow_pan() {
		let (mut state, root) = state();
		state.apply(CanvasEvent::BranchRequested(root));
		let child = state.graph.node_ids()[1];
		let child_pos = state.graph.node(child).unwrap().position;

		state.apply(CanvasEvent::PointerDown {
			target: PressTarget::Background,
			at: Point::ZERO,
		});
		state.apply(CanvasEvent::PointerMove {
			at: Point::new(5.0, 5.0),
		});

		assert_eq!(state.graph.connections().len(), 1);
		let line = state.connection_line(state.graph.connections()[0]).unwrap();
		assert_eq!(line.from, root);
		assert_eq!(line.to, child);
		assert_eq!(line.start, Point::new(705.0, 380.0));
		assert_eq!(line.end, child_pos + Point::new(5.0, 80.0));
	}

	#[test]
	fn cursor_tracks_gesture() {
		let (mut state, root) = state();
		assert_eq!(state.cursor(), "grab");

		state.apply(CanvasEvent::PointerDown {
			target: PressTarget::Node(root),
			at: Point::new(410.0, 310.0),
		});
		assert_eq!(state.cursor(), "move");
		state.apply(CanvasEvent::PointerUp);

		state.apply(CanvasEvent::PointerDown {
			target: PressTarget::Background,
			at: Point::ZERO,
		});
		assert_eq!(state.cursor(), "grabbing");
		state.apply(CanvasEvent::PointerLeave);
		assert_eq!(state.cursor(), "grab");
	}

	#[test]
	fn connection_line_updates_in_place_and_vanishes_with_endpoint() {
		let (mut state, root) = state();
		state.apply(CanvasEvent::BranchRequested(root));
		let edge = state.graph.connections()[0];
		let before = state.connection_line(edge).unwrap();

		state.apply(CanvasEvent::PointerDown {
			target: PressTarget::Node(root),
			at: Point::new(400.0, 300.0),
		});
		state.apply(CanvasEvent::PointerMove {
			at: Point::new(420.0, 290.0),
		});
		let after = state.connection_line(edge).unwrap();
		assert_eq!((after.from, after.to), (before.from, before.to));
		assert_eq!(after.start, before.start + Point::new(20.0, -10.0));
		assert_eq!(after.end, before.end);

		state.apply(CanvasEvent::PointerUp);
		state.apply(CanvasEvent::DeleteRequested(edge.to));
		assert_eq!(state.connection_line(edge), None);
	}
}
