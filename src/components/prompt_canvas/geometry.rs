//! Canvas-space to screen-space projection.
//!
//! Nodes live in canvas space. The only transform between canvas and screen
//! is the pan offset, applied uniformly to nodes and connection endpoints.

use std::ops::{Add, Sub};

/// Rendered width of a node card, including padding and border.
pub const NODE_WIDTH: f64 = 300.0;
/// Rendered height of a node card used for connection anchors.
pub const NODE_HEIGHT: f64 = 150.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

pub fn to_screen(position: Point, pan: Point) -> Point {
	position + pan
}

/// Screen-space endpoints of a parent -> child connection: the parent's
/// right-center edge and the child's left-center edge.
pub fn connection_anchors(from: Point, to: Point, pan: Point) -> (Point, Point) {
	(
		to_screen(from + Point::new(NODE_WIDTH, NODE_HEIGHT / 2.0), pan),
		to_screen(to + Point::new(0.0, NODE_HEIGHT / 2.0), pan),
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn screen_position_adds_pan() {
		let screen = to_screen(Point::new(100.0, 100.0), Point::new(-30.0, 15.0));
		assert_eq!(screen, Point::new(70.0, 115.0));
	}

	#[test]
	fn anchors_meet_card_edges() {
		let (start, end) = connection_anchors(
			Point::new(200.0, 200.0),
			Point::new(450.0, 180.0),
			Point::new(10.0, 20.0),
		);
		assert_eq!(start, Point::new(510.0, 295.0));
		assert_eq!(end, Point::new(460.0, 275.0));
	}
}
