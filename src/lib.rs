//! Leptos client-side app wiring and routes.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::info;

// Modules
pub mod catalog;
pub mod components;
pub mod config;
mod layouts;
pub mod net;
mod pages;
pub mod routes;
pub mod state;
pub mod util;

use crate::catalog::Library;
use crate::config::AppConfig;
use crate::layouts::MainLayout;
use crate::state::notifications::Notifier;
use crate::state::theme::{ThemeMode, ThemeStore};

// Top-Level pages
use crate::pages::catalog::CatalogPage;
use crate::pages::detail::{AlgorithmDetail, CommandDetail};
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging(config: &AppConfig) {
	let _ = console_log::init_with_level(config.log_level);
	console_error_panic_hook::set_once();
	info!("Logging initialized at {}", config.log_level);
}

/// Root component: provides the theme, toast queue and catalog tables,
/// then routes every page inside the main layout.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	let theme = ThemeStore::provide(ThemeMode::default());
	Notifier::provide();

	let library = Library::load().map(Arc::new);
	match &library {
		Ok(library) => provide_context(Arc::clone(library)),
		Err(err) => log::error!("Catalog failed to load: {err}"),
	}

	view! {
		<Html attr:lang="es" attr:dir="ltr" attr:data-theme=move || theme.mode().as_str() />

		// sets the document title
		<Title text="Aprende Git" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<MainLayout>
				<ErrorBoundary fallback=|errors| {
					view! {
						<div class="app-error">
							<h1>"¡Algo salió mal!"</h1>
							<ul>
								{move || {
									errors
										.get()
										.into_iter()
										.map(|(_, e)| view! { <li>{e.to_string()}</li> })
										.collect_view()
								}}
							</ul>
						</div>
					}
				}>
					{library
						.map(|_| {
							view! {
								<Routes fallback=|| view! { <NotFound /> }>
									<Route path=path!("/") view=Home />
									<Route path=path!("/comenzar") view=CatalogPage />
									<Route path=path!("/start") view=CatalogPage />
									<Route path=path!("/comando/:id") view=CommandDetail />
									<Route path=path!("/algoritmo/:id") view=AlgorithmDetail />
								</Routes>
							}
						})}
				</ErrorBoundary>
			</MainLayout>
		</Router>
	}
}
