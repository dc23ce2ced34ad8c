use leptos::prelude::*;

use super::geometry::{NODE_HEIGHT, NODE_WIDTH, Point};
use super::state::{CanvasEvent, CanvasState};
use super::types::{Connection, NodeId};

const EDGE_COLOR: &str = "#4a90e2";

// Fixed card height; the textarea takes whatever the header and button leave.
const CARD_STYLE: &str = "position: absolute; box-sizing: border-box; display: flex; \
	flex-direction: column; background: #2d2d2d; border: 2px solid #4a90e2; border-radius: 8px; \
	padding: 12px; cursor: move; z-index: 10; box-shadow: 0 4px 12px rgba(0,0,0,0.3);";

const HEADER_STYLE: &str = "flex: 0 0 22px; margin-bottom: 6px; display: flex; \
	justify-content: space-between; align-items: center;";

const TEXTAREA_STYLE: &str = "flex: 1 1 auto; min-height: 0; width: 100%; box-sizing: border-box; \
	background: #1a1a1a; border: 1px solid #444; border-radius: 4px; color: #fff; padding: 8px; \
	font-size: 14px; font-family: inherit; resize: none; margin-bottom: 6px; cursor: text;";

const BRANCH_BUTTON_STYLE: &str = "flex: 0 0 28px; width: 100%; background: #4a90e2; border: none; \
	color: white; border-radius: 4px; cursor: pointer; font-weight: bold; font-size: 13px;";

const DELETE_BUTTON_STYLE: &str = "background: #d9534f; border: none; color: white; \
	padding: 4px 8px; border-radius: 4px; cursor: pointer; font-size: 11px;";

/// Card box at a screen position, sized so connection anchors hit its edges.
fn card_style(pos: Point) -> String {
	format!(
		"{CARD_STYLE} left: {}px; top: {}px; width: {NODE_WIDTH}px; height: {NODE_HEIGHT}px;",
		pos.x, pos.y
	)
}

/// Lines from each parent's right edge to its child's left edge.
#[component]
pub fn ConnectionLayer(state: RwSignal<CanvasState>) -> impl IntoView {
	let connections = Memo::new(move |_| state.with(|s| s.graph.connections().to_vec()));

	view! {
		<svg style="position: absolute; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: 1;">
			<For
				each=move || connections.get()
				key=|c| (c.from, c.to)
				children=move |c: Connection| view! { <ConnectionPath connection=c state=state /> }
			/>
		</svg>
	}
}

/// A single connection whose endpoints follow drags and pans.
#[component]
fn ConnectionPath(connection: Connection, state: RwSignal<CanvasState>) -> impl IntoView {
	let line = move || state.with(|s| s.connection_line(connection));

	view! {
		<line
			x1=move || line().map(|l| l.start.x.to_string()).unwrap_or_default()
			y1=move || line().map(|l| l.start.y.to_string()).unwrap_or_default()
			x2=move || line().map(|l| l.end.x.to_string()).unwrap_or_default()
			y2=move || line().map(|l| l.end.y.to_string()).unwrap_or_default()
			stroke=EDGE_COLOR
			stroke-width="2"
		/>
	}
}

/// One prompt card. Position and text are read reactively so the textarea
/// element survives drags and edits.
#[component]
pub fn NodeCard(id: NodeId, state: RwSignal<CanvasState>) -> impl IntoView {
	let is_root = state.with_untracked(|s| s.graph.root_id() == Some(id));

	let style = move || card_style(state.with(|s| s.screen_position(id)).unwrap_or_default());
	let text = move || {
		state.with(|s| {
			s.graph
				.node(id)
				.map(|n| n.text.clone())
				.unwrap_or_default()
		})
	};

	let on_branch = move |_| state.update(|s| s.apply(CanvasEvent::BranchRequested(id)));
	let on_delete = move |_| state.update(|s| s.apply(CanvasEvent::DeleteRequested(id)));

	view! {
		<div class="prompt-node" data-node-id={id.to_string()} style=style>
			<div style=HEADER_STYLE>
				<span style="font-size: 12px; color: #888; font-weight: bold;">
					{format!("Node {id}")}
				</span>
				{(!is_root)
					.then(|| {
						view! {
							<button style=DELETE_BUTTON_STYLE on:click=on_delete>
								"Delete"
							</button>
						}
					})}
			</div>
			<textarea
				prop:value=text
				on:input=move |ev| {
					let text = event_target_value(&ev);
					state.update(|s| s.apply(CanvasEvent::TextChanged { node: id, text }));
				}
				placeholder="Type your prompt here..."
				style=TEXTAREA_STYLE
			/>
			<button style=BRANCH_BUTTON_STYLE on:click=on_branch>
				"+ Create Branch"
			</button>
		</div>
	}
}
