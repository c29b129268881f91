use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
	#[default]
	Primary,
	Secondary,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
	Small,
	#[default]
	Medium,
	Large,
}

impl ButtonVariant {
	fn class(self) -> &'static str {
		match self {
			Self::Primary => "btn--primary",
			Self::Secondary => "btn--secondary",
		}
	}
}

impl ButtonSize {
	fn class(self) -> &'static str {
		match self {
			Self::Small => "btn--sm",
			Self::Medium => "btn--md",
			Self::Large => "btn--lg",
		}
	}
}

#[component]
pub fn Button(
	#[prop(optional)] variant: ButtonVariant,
	#[prop(optional)] size: ButtonSize,
	#[prop(optional, into)] disabled: Signal<bool>,
	#[prop(optional, into)] on_click: Option<Callback<()>>,
	#[prop(optional, into)] title: Option<String>,
	children: Children,
) -> impl IntoView {
	view! {
		<button
			type="button"
			class=format!("btn {} {}", variant.class(), size.class())
			disabled=move || disabled.get()
			title=title
			on:click=move |_| {
				if let Some(cb) = on_click {
					cb.run(());
				}
			}
		>
			{children()}
		</button>
	}
}
