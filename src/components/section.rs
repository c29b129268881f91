use leptos::prelude::*;

/// Titled content block.
#[component]
pub fn Section(
	#[prop(into)] title: String,
	#[prop(optional, into)] subtitle: Option<String>,
	#[prop(optional, into)] class: String,
	children: Children,
) -> impl IntoView {
	view! {
		<section class=format!("section {class}")>
			<h2 class="section__title">{title}</h2>
			{subtitle.map(|s| view! { <p class="section__subtitle">{s}</p> })}
			<div class="section__content">{children()}</div>
		</section>
	}
}
