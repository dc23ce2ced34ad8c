use leptos::prelude::*;

use crate::components::prompt_canvas::PromptCanvas;

const OVERLAY_STYLE: &str = "position: absolute; top: 20px; left: 20px; background: rgba(0,0,0,0.7); \
	padding: 12px; border-radius: 8px; font-size: 12px; color: #aaa; z-index: 100; pointer-events: none;";

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-canvas">
				<PromptCanvas />
				<div class="controls-overlay" style=OVERLAY_STYLE>
					<div>
						<strong>"Controls:"</strong>
					</div>
					<div>"• Drag nodes to move them"</div>
					<div>"• Drag canvas to pan"</div>
					<div>"• Click \"Create Branch\" to add child nodes"</div>
				</div>
			</div>
		</ErrorBoundary>
	}
}
