use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::button::{Button, ButtonSize};
use crate::components::tutorial::Tutorial;

/// Welcome screen. "Comenzar" swaps it for the tutorial, which starts from
/// the first step every time.
#[component]
pub fn Home() -> impl IntoView {
	let show_tutorial = RwSignal::new(false);

	view! {
		<Title text="Aprende Git" />
		<Show
			when=move || show_tutorial.get()
			fallback=move || {
				view! {
					<div class="home">
						<h1 class="home__title">"Bienvenido"</h1>
						<p class="home__subtitle">"Aprende de Git"</p>
						<div class="home__badge" aria-hidden="true">"⚡"</div>
						<Button
							size=ButtonSize::Large
							on_click=Callback::new(move |()| show_tutorial.set(true))
						>
							"Comenzar"
						</Button>
						<p class="home__hint">
							"Haz clic en el botón para iniciar el tutorial interactivo sobre Git y aprender los conceptos fundamentales del control de versiones"
						</p>
					</div>
				}
			}
		>
			<Tutorial on_complete=Callback::new(move |()| show_tutorial.set(false)) />
		</Show>
	}
}
