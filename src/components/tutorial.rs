use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::state::tutorial::{Advance, STEPS, StepStatus, TutorialFlow};

/// Step-by-step introduction. Calls `on_complete` after the last step or
/// when skipped; the caller unmounts it then.
#[component]
pub fn Tutorial(#[prop(into)] on_complete: Callback<()>) -> impl IntoView {
	let flow = RwSignal::new(TutorialFlow::new(STEPS.len()));

	let finish = move |advance: Advance| {
		if advance == Advance::Completed {
			log::info!("Tutorial completed");
			on_complete.run(());
		}
	};
	let on_next = Callback::new(move |()| {
		let mut advance = Advance::Completed;
		flow.update(|f| advance = f.next());
		finish(advance);
	});
	let on_previous = Callback::new(move |()| flow.update(TutorialFlow::previous));
	let at_first = Signal::derive(move || flow.get().is_first());
	let on_skip = move |_| finish(flow.get_untracked().skip());

	let step = move || STEPS.get(flow.get().index()).copied();

	let indicators = (0..STEPS.len())
		.map(|i| {
			let class = move || match flow.get().status(i) {
				StepStatus::Done => "tutorial__dot tutorial__dot--done",
				StepStatus::Current => "tutorial__dot tutorial__dot--current",
				StepStatus::Upcoming => "tutorial__dot",
			};
			view! { <span class=class></span> }
		})
		.collect_view();

	view! {
		<div class="tutorial">
			<div class="tutorial__indicators">{indicators}</div>
			<p class="tutorial__progress">{move || flow.get().progress_label()}</p>
			{move || {
				step()
					.map(|s| {
						view! {
							<div class="tutorial__step">
								<h2 class="tutorial__title">{s.title}</h2>
								<p class="tutorial__body">{s.body}</p>
							</div>
						}
					})
			}}
			<div class="tutorial__actions">
				<Button variant=ButtonVariant::Secondary disabled=at_first on_click=on_previous>
					"← Anterior"
				</Button>
				<Button on_click=on_next>
					{move || if flow.get().is_last() { "Finalizar ✓" } else { "Siguiente" }}
				</Button>
			</div>
			<button type="button" class="tutorial__skip" on:click=on_skip>
				"Saltar tutorial"
			</button>
		</div>
	}
}
