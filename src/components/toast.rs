use leptos::prelude::*;

use crate::state::notifications::Notifier;

/// Renders the app's toast queue. Each toast stays until dismissed.
#[component]
pub fn ToastHost() -> impl IntoView {
	let notifier = expect_context::<Notifier>();

	view! {
		<div class="toasts" aria-live="polite">
			<For each=move || notifier.toasts() key=|toast| toast.id let:toast>
				<div class=format!("toast {}", toast.kind.class()) role="status">
					<span class="toast__message">{toast.message.clone()}</span>
					<button
						type="button"
						class="toast__close"
						title="Cerrar"
						on:click=move |_| notifier.dismiss(toast.id)
					>
						"×"
					</button>
				</div>
			</For>
		</div>
	}
}
