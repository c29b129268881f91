use leptos::prelude::*;

use crate::util::format::truncate_text;

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

pub const DEFAULT_DESCRIPTION_LENGTH: usize = 120;

/// Description as the card shows it, and whether the "view more" hint
/// belongs underneath.
pub fn card_description(description: &str, max_chars: usize, show_view_more: bool) -> (String, bool) {
	let cut = truncate_text(description, max_chars);
	(cut.text.into_owned(), cut.truncated && show_view_more)
}

/// Clickable summary card. Long descriptions are cut at
/// `max_description_length` characters.
#[component]
pub fn Card(
	#[prop(into)] title: String,
	#[prop(into)] description: String,
	#[prop(optional)] children: Option<Children>,
	#[prop(optional, into)] on_click: Option<Callback<()>>,
	#[prop(optional, into)] class: String,
	#[prop(default = DEFAULT_DESCRIPTION_LENGTH)] max_description_length: usize,
	#[prop(default = true)] show_view_more: bool,
) -> impl IntoView {
	let (text, view_more) = card_description(&description, max_description_length, show_view_more);
	let clickable = on_click.is_some();

	view! {
		<div
			class=format!("card {class}{}", if clickable { " card--clickable" } else { "" })
			on:click=move |_| {
				if let Some(cb) = on_click {
					cb.run(());
				}
			}
		>
			<h3 class="card__title">{title}</h3>
			<p class="card__description">{text}</p>
			{view_more.then(|| view! { <span class="card__more">"Ver más"</span> })}
			{children.map(|c| view! { <div class="card__body">{c()}</div> })}
		</div>
	}
}
