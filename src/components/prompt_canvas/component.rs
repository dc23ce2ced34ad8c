use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlDivElement, MouseEvent};

use super::geometry::Point;
use super::graph::ROOT_POSITION;
use super::interaction::PressTarget;
use super::render::{ConnectionLayer, NodeCard};
use super::state::{CanvasEvent, CanvasState};
use super::types::NodeId;

const CANVAS_STYLE: &str = "width: 100vw; height: 100vh; position: relative; overflow: hidden; \
	background: #1a1a1a; user-select: none;";

/// Pointer position relative to the canvas element's top-left corner.
fn pointer_position(ev: &MouseEvent, canvas: &HtmlDivElement) -> Point {
	let rect = canvas.get_bounding_client_rect();
	Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn event_target(ev: &MouseEvent) -> Option<Element> {
	ev.target()?.dyn_into::<Element>().ok()
}

/// Id of the node card the element sits in, if any.
fn enclosing_node(el: &Element) -> Option<NodeId> {
	el.closest("[data-node-id]")
		.ok()
		.flatten()?
		.get_attribute("data-node-id")?
		.parse()
		.ok()
}

fn press_target(ev: &MouseEvent, canvas: &HtmlDivElement) -> Option<PressTarget> {
	let el = event_target(ev)?;
	let canvas_node: &web_sys::Node = canvas;
	let is_canvas = el.is_same_node(Some(canvas_node));
	PressTarget::classify(enclosing_node(&el), &el.tag_name(), is_canvas)
}

#[component]
pub fn PromptCanvas(#[prop(default = ROOT_POSITION)] root_position: Point) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Div>::new();
	let state = RwSignal::new(CanvasState::new(root_position));
	let node_ids = Memo::new(move |_| state.with(|s| s.graph.node_ids()));

	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(target) = press_target(&ev, &canvas) else {
			return;
		};
		let at = pointer_position(&ev, &canvas);
		state.update(|s| s.apply(CanvasEvent::PointerDown { target, at }));
	};

	let on_mousemove = move |ev: MouseEvent| {
		if state.with_untracked(|s| s.gestures.is_idle()) {
			return;
		}
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let at = pointer_position(&ev, &canvas);
		state.update(|s| s.apply(CanvasEvent::PointerMove { at }));
	};

	let on_mouseup = move |_: MouseEvent| {
		state.update(|s| s.apply(CanvasEvent::PointerUp));
	};

	let on_mouseleave = move |_: MouseEvent| {
		state.update(|s| s.apply(CanvasEvent::PointerLeave));
	};

	let style = move || format!("{CANVAS_STYLE} cursor: {};", state.with(|s| s.cursor()));

	view! {
		<div
			node_ref=canvas_ref
			class="prompt-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style=style
		>
			<ConnectionLayer state=state />
			<For
				each=move || node_ids.get()
				key=|id| *id
				children=move |id: NodeId| view! { <NodeCard id=id state=state /> }
			/>
		</div>
	}
}
