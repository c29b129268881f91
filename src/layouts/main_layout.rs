use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::toast::ToastHost;
use crate::routes::{HOME, NAV};
use crate::state::theme::try_use_theme;

/// Page chrome: header with navigation and theme toggle, footer, and the
/// toast host.
#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
	let theme = try_use_theme();
	let location = use_location();
	let year = js_sys::Date::new_0().get_full_year();

	let nav = NAV
		.iter()
		.map(|item| {
			let item = *item;
			let class = move || {
				if item.is_active(&location.pathname.get()) {
					"layout__nav-link layout__nav-link--active"
				} else {
					"layout__nav-link"
				}
			};
			view! {
				<a href=item.href class=class>
					{item.label}
				</a>
			}
		})
		.collect_view();

	view! {
		<div class="layout">
			<header class="layout__header">
				<a href=HOME class="layout__brand">
					"Aprende Git"
				</a>
				<nav class="layout__nav">{nav}</nav>
				{theme
					.map(|theme| {
						view! {
							<button
								type="button"
								class="layout__theme-toggle"
								title="Cambiar tema"
								on:click=move |_| theme.toggle()
							>
								{move || if theme.mode().is_dark() { "☀" } else { "☾" }}
							</button>
						}
					})}
			</header>
			<main class="layout__main">{children()}</main>
			<footer class="layout__footer">
				{format!("© {year} Aprende Git. Plataforma educativa de control de versiones.")}
			</footer>
			<ToastHost />
		</div>
	}
}
