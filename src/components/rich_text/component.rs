use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::backend::{self, EditorBackend, EditorSnapshot, ExecCommandBackend};
use super::commands::{ActiveFormats, FormatCommand, HistoryState, TOOLBAR};

type SharedBackend = Rc<RefCell<Option<ExecCommandBackend>>>;

/// Rich text editor with a formatting toolbar. `content` is the HTML to
/// show; every edit is reported through `on_change`, and setting `content`
/// from outside (e.g. clearing it) replaces the document.
#[component]
pub fn RichTextEditor(
	#[prop(into)] content: Signal<String>,
	#[prop(into)] on_change: Callback<String>,
	#[prop(into, default = "Escribe aquí...".to_owned())] placeholder: String,
) -> impl IntoView {
	let editor_ref = NodeRef::<leptos::html::Div>::new();
	let editor: SharedBackend = Rc::new(RefCell::new(None));
	let active = RwSignal::new(ActiveFormats::default());
	let history = RwSignal::new(HistoryState::default());
	let empty = RwSignal::new(true);

	let apply_snapshot = move |snap: &EditorSnapshot| {
		active.set(snap.active);
		history.set(snap.history);
		empty.set(!crate::util::markup::has_preview(&snap.html));
	};

	let editor_init = editor.clone();
	Effect::new(move |_| {
		let html = content.get();
		let Some(root) = editor_ref.get() else {
			return;
		};
		let mut slot = editor_init.borrow_mut();
		if slot.is_none() {
			*slot = ExecCommandBackend::new(root.into());
			if slot.is_none() {
				log::error!("Rich text editor could not reach the document");
			}
		}
		if let Some(ref b) = *slot {
			backend::sync_content(b, &html);
			apply_snapshot(&backend::snapshot(b));
		}
	});

	let editor_input = editor.clone();
	let on_input = move |_| {
		if let Some(ref b) = *editor_input.borrow() {
			let snap = backend::snapshot(b);
			apply_snapshot(&snap);
			on_change.run(snap.html);
		}
	};

	// selection moves change the active formats without an input event
	let editor_select = editor.clone();
	let refresh = move || {
		if let Some(ref b) = *editor_select.borrow() {
			active.set(b.active_formats());
			history.set(b.history());
		}
	};
	let refresh_key = refresh.clone();

	let button = move |command: FormatCommand| {
		let editor = editor.clone();
		let on_mousedown = move |ev: MouseEvent| {
			// keep the selection inside the editor
			ev.prevent_default();
			if let Some(ref b) = *editor.borrow() {
				let before = b.content();
				let snap = backend::run(b, command);
				apply_snapshot(&snap);
				if snap.html != before {
					on_change.run(snap.html);
				}
			}
		};
		view! {
			<button
				type="button"
				class=move || {
					if command.is_active(&active.get()) {
						"rich-text__button rich-text__button--active"
					} else {
						"rich-text__button"
					}
				}
				disabled=move || !command.is_enabled(&history.get())
				title=command.title()
				on:mousedown=on_mousedown
			>
				{command.label()}
			</button>
		}
	};

	let toolbar = TOOLBAR
		.iter()
		.map(|group| {
			let buttons = group.iter().map(|cmd| button(*cmd)).collect_view();
			view! { <div class="rich-text__group">{buttons}</div> }
		})
		.collect_view();

	view! {
		<div class="rich-text">
			<div class="rich-text__toolbar">{toolbar}</div>
			<div
				node_ref=editor_ref
				class=move || {
					if empty.get() {
						"rich-text__content rich-text__content--empty"
					} else {
						"rich-text__content"
					}
				}
				contenteditable="true"
				data-placeholder=placeholder
				on:input=on_input
				on:keyup=move |_| refresh_key()
				on:mouseup=move |_| refresh()
			/>
		</div>
	}
}
