use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::catalog::{CatalogKind, Library};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::Card;
use crate::components::input::Input;
use crate::components::rich_text::RichTextEditor;
use crate::components::tabs::{TabItem, Tabs};
use crate::state::notifications::{Notifier, ToastKind};
use crate::util::markup::{Submission, has_preview};
use crate::util::storage::LocalCache;

/// Storage key of the manual-entry draft.
pub const DRAFT_KEY: &str = "manual_draft";

const BROWSE_TAB: &str = "catalogo";
const MANUAL_TAB: &str = "manual";

/// Start page: browse the command catalog or write free text. Both tabs
/// keep their state while the other is shown.
#[component]
pub fn CatalogPage() -> impl IntoView {
	let library = expect_context::<Arc<Library>>();
	let notifier = expect_context::<Notifier>();
	let cache = LocalCache::browser();

	let active = RwSignal::new(BROWSE_TAB);
	let query = RwSignal::new(String::new());
	let draft = RwSignal::new(cache.get(DRAFT_KEY, String::new()));

	let browse = move || {
		let library = library.clone();
		let navigate = use_navigate();
		let cards = move || {
			let catalog = library.get(CatalogKind::Command);
			let matches = catalog.filter(&query.get());
			if matches.is_empty() {
				return view! { <p class="catalog__empty">"No se encontraron comandos."</p> }
					.into_any();
			}
			matches
				.into_iter()
				.map(|entry| {
					let path = catalog.kind().detail_path(entry.id);
					let navigate = navigate.clone();
					view! {
						<Card
							title=entry.name.clone()
							description=entry.short_description.clone()
							on_click=Callback::new(move |()| navigate(&path, Default::default()))
						/>
					}
				})
				.collect_view()
				.into_any()
		};
		view! {
			<div class="catalog__browse">
				<h2>"Catálogo de Comandos Git"</h2>
				<p class="catalog__intro">
					"Explora los comandos más importantes de Git. Haz clic en cualquier comando para ver su descripción completa y un diagrama de flujo interactivo."
				</p>
				<Input
					label="Filtrar"
					placeholder="Buscar por nombre o descripción"
					value=query
					on_input=move |text: String| query.set(text)
				/>
				<div class="catalog__grid">{cards}</div>
			</div>
		}
	};

	let on_change = move |html: String| {
		cache.set(DRAFT_KEY, &html);
		draft.set(html);
	};
	let on_process = move |()| {
		let submission = draft.with(|html| Submission::evaluate(html));
		log::debug!("Manual entry processed: {submission:?}");
		let kind = match submission {
			Submission::Empty => ToastKind::Warning,
			Submission::Accepted { .. } => ToastKind::Success,
		};
		notifier.notify(kind, submission.message());
	};
	let on_clear = move |()| {
		draft.set(String::new());
		cache.remove(DRAFT_KEY);
		notifier.notify(ToastKind::Info, "Contenido borrado");
	};

	let manual = move || {
		view! {
			<div class="catalog__manual">
				<h2>"Entrada Manual"</h2>
				<p class="catalog__intro">
					"Ingresa manualmente los datos que deseas procesar. Usa el editor para dar formato a tu contenido."
				</p>
				<span class="catalog__label">"Editor de texto"</span>
				<RichTextEditor
					content=draft
					on_change=on_change
					placeholder="Escribe aquí tu contenido... Puedes usar las herramientas de formato en la barra superior."
				/>
				<div class="catalog__actions">
					<Button size=ButtonSize::Large on_click=Callback::new(on_process)>
						"Procesar"
					</Button>
					<Button
						variant=ButtonVariant::Secondary
						size=ButtonSize::Large
						on_click=Callback::new(on_clear)
					>
						"Limpiar"
					</Button>
				</div>
				<Show when=move || draft.with(|html| has_preview(html))>
					<div class="catalog__preview">
						<h3>"Vista previa del contenido:"</h3>
						<div class="catalog__preview-body" inner_html=move || draft.get()></div>
					</div>
				</Show>
			</div>
		}
	};

	view! {
		<Title text="Comenzar | Aprende Git" />
		<div class="catalog">
			<h1>"Aprende Git"</h1>
			<p class="catalog__tagline">"Explora comandos o practica con el editor"</p>
			<Tabs
				tabs=vec![
					TabItem::new(BROWSE_TAB, "Comandos de Git", browse),
					TabItem::new(MANUAL_TAB, "Entrada Manual", manual),
				]
				active=active
				on_change=move |id: &'static str| active.set(id)
			/>
		</div>
	}
}
