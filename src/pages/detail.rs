use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::catalog::{CatalogKind, DetailRecord, Library};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::diagram::DiagramCanvas;
use crate::components::section::Section;
use crate::routes::START;

const DIAGRAM_HEIGHT: f64 = 600.0;

const COMMAND_HINTS: &[&str] = &[
	"Arrastra los nodos para reorganizar el diagrama",
	"Usa la rueda del mouse para hacer zoom",
	"Haz clic y arrastra el fondo para mover la vista",
	"Mantén Shift y arrastra de un nodo a otro para conectarlos",
	"Los nodos animados muestran el flujo principal del comando",
	"Las etiquetas en las flechas indican condiciones o pasos",
];

const ALGORITHM_HINTS: &[&str] = &[
	"Arrastra los nodos para reorganizar el grafo",
	"Usa la rueda del mouse para hacer zoom",
	"Haz clic y arrastra el fondo para mover la vista",
	"Mantén Shift y arrastra de un nodo a otro para conectarlos",
	"Usa los controles en la esquina del diagrama",
];

fn diagram_hints(kind: CatalogKind) -> (&'static str, &'static [&'static str]) {
	match kind {
		CatalogKind::Command => ("🎯 Interacción con el Diagrama:", COMMAND_HINTS),
		CatalogKind::Algorithm => ("💡 Interacción:", ALGORITHM_HINTS),
	}
}

/// Git command detail, `/comando/:id`.
#[component]
pub fn CommandDetail() -> impl IntoView {
	view! { <DetailPage kind=CatalogKind::Command /> }
}

/// Algorithm detail, `/algoritmo/:id`.
#[component]
pub fn AlgorithmDetail() -> impl IntoView {
	view! { <DetailPage kind=CatalogKind::Algorithm /> }
}

/// Looks up the `:id` route parameter in the `kind` table and renders the
/// record, or a not-found view when there is none.
#[component]
pub fn DetailPage(kind: CatalogKind) -> impl IntoView {
	let library = expect_context::<Arc<Library>>();
	let params = use_params_map();

	let record = move || {
		let raw = params.read().get("id").unwrap_or_default();
		let found = library.get(kind).lookup(&raw).cloned();
		if found.is_none() {
			log::warn!("No {kind:?} record for id `{raw}`");
		}
		found
	};

	move || match record() {
		Some(record) => view! { <DetailView kind=kind record=record /> }.into_any(),
		None => view! { <MissingRecord kind=kind /> }.into_any(),
	}
}

#[component]
fn BackToCatalog(
	#[prop(optional)] variant: ButtonVariant,
	#[prop(optional)] size: ButtonSize,
) -> impl IntoView {
	let navigate = use_navigate();
	view! {
		<Button
			variant=variant
			size=size
			on_click=Callback::new(move |()| navigate(START, Default::default()))
		>
			{if variant == ButtonVariant::Primary { "Volver al catálogo" } else { "← Volver al catálogo" }}
		</Button>
	}
}

#[component]
fn MissingRecord(kind: CatalogKind) -> impl IntoView {
	view! {
		<Title text=kind.not_found_title() />
		<div class="detail detail--missing">
			<h1>{kind.not_found_title()}</h1>
			<BackToCatalog />
		</div>
	}
}

#[component]
fn DetailView(kind: CatalogKind, record: DetailRecord) -> impl IntoView {
	let (hints_title, hints) = diagram_hints(kind);
	let examples = record.examples_block();
	let page_title = format!("{} | Aprende Git", record.name);
	let DetailRecord {
		name,
		long_description,
		syntax,
		diagram,
		..
	} = record;

	view! {
		<Title text=page_title />
		<div class="detail">
			<header class="detail__header">
				<BackToCatalog variant=ButtonVariant::Secondary size=ButtonSize::Small />
				<h1 class="detail__name">{name}</h1>
				<p class="detail__tagline">{kind.tagline()}</p>
			</header>

			<Section title=kind.description_title()>
				<p class="detail__description">{long_description}</p>
				{syntax
					.map(|syntax| {
						view! {
							<div class="detail__syntax">
								<p class="detail__syntax-label">"Sintaxis:"</p>
								<code>{syntax}</code>
							</div>
						}
					})}
			</Section>

			{examples
				.map(|block| {
					view! {
						<Section title="Ejemplos de Uso">
							<pre class="detail__examples">
								<code>{block}</code>
							</pre>
							<div class="detail__tip">
								<h3>"💡 Consejo:"</h3>
								<p>
									"Prueba estos comandos en tu terminal. La mejor forma de aprender Git es practicando en proyectos reales."
								</p>
							</div>
						</Section>
					}
				})}

			<Section title=kind.diagram_title()>
				<DiagramCanvas data=Signal::derive(move || diagram.clone()) height=DIAGRAM_HEIGHT />
				<div class="detail__tip">
					<h3>{hints_title}</h3>
					<ul>{hints.iter().map(|hint| view! { <li>{*hint}</li> }).collect_view()}</ul>
				</div>
			</Section>
		</div>
	}
}
