use leptos::prelude::*;

/// Labelled single-line text field. Controlled through `value`.
#[component]
pub fn Input(
	#[prop(into)] value: Signal<String>,
	#[prop(into)] on_input: Callback<String>,
	#[prop(optional, into)] label: Option<String>,
	#[prop(optional, into)] placeholder: String,
	#[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
	view! {
		<label class="input">
			{label.map(|l| view! { <span class="input__label">{l}</span> })}
			<input
				class="input__field"
				type=input_type
				placeholder=placeholder
				prop:value=move || value.get()
				on:input=move |ev| on_input.run(event_target_value(&ev))
			/>
		</label>
	}
}
