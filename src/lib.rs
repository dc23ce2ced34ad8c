//! Prompt Canvas: an interactive, node-based canvas for branching prompt
//! fragments into a tree. Client-side Leptos app, mounted from `main.rs`.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Pulled in only to enable the `js` entropy backend for `rand` on wasm32.
use getrandom as _;

mod components;
mod pages;

use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Page title shown in the browser tab.
pub const APP_TITLE: &str = "Prompt Canvas";
/// `<meta name="description">` content.
pub const APP_DESCRIPTION: &str = "Interactive node-based prompt canvas";

/// Initialize console logging and the panic hook for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("{APP_TITLE}: logging initialized");
}

/// Root of the interactive node-based prompt canvas: document metadata plus
/// a router with the canvas on `/` and a 404 fallback.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=APP_TITLE />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content=APP_DESCRIPTION />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
