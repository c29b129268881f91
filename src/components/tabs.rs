use leptos::prelude::*;

/// One tab: its id, button label and lazily built panel.
#[derive(Clone)]
pub struct TabItem {
	pub id: &'static str,
	pub label: &'static str,
	pub content: ViewFn,
}

impl TabItem {
	pub fn new(id: &'static str, label: &'static str, content: impl Into<ViewFn>) -> Self {
		Self {
			id,
			label,
			content: content.into(),
		}
	}
}

/// Controlled tab strip. The parent owns `active` and updates it from
/// `on_change`; only the active panel is mounted.
#[component]
pub fn Tabs(
	tabs: Vec<TabItem>,
	#[prop(into)] active: Signal<&'static str>,
	#[prop(into)] on_change: Callback<&'static str>,
) -> impl IntoView {
	let buttons = tabs
		.iter()
		.map(|tab| {
			let id = tab.id;
			view! {
				<button
					type="button"
					role="tab"
					class=move || {
						if active.get() == id { "tabs__tab tabs__tab--active" } else { "tabs__tab" }
					}
					aria-selected=move || (active.get() == id).to_string()
					on:click=move |_| on_change.run(id)
				>
					{tab.label}
				</button>
			}
		})
		.collect_view();

	let panel = move || {
		let current = active.get();
		tabs.iter()
			.find(|tab| tab.id == current)
			.map(|tab| tab.content.run())
	};

	view! {
		<div class="tabs">
			<div class="tabs__list" role="tablist">{buttons}</div>
			<div class="tabs__panel" role="tabpanel">{panel}</div>
		</div>
	}
}
