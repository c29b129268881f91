use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::HOME;

/// Fallback for paths no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
	log::debug!("No route for the current path");

	view! {
		<Title text="Página no encontrada" />
		<div class="not-found">
			<h1>"Página no encontrada"</h1>
			<p>"La dirección que buscas no existe."</p>
			<a href=HOME class="btn btn--primary btn--md">
				"Volver al inicio"
			</a>
		</div>
	}
}
