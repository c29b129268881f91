use std::cell::RefCell;

use super::*;

/// Backend with a toy document: bold toggles wrap the text in `<b>`, and
/// every applied command pushes onto an undo stack.
#[derive(Default)]
struct FakeBackend {
	html: RefCell<String>,
	active: RefCell<ActiveFormats>,
	undo: RefCell<Vec<String>>,
	redo: RefCell<Vec<String>>,
	applied: RefCell<Vec<FormatCommand>>,
}

impl EditorBackend for FakeBackend {
	fn apply(&self, command: FormatCommand) {
		self.applied.borrow_mut().push(command);
		let current = self.html.borrow().clone();
		match command {
			FormatCommand::Undo => {
				if let Some(prev) = self.undo.borrow_mut().pop() {
					self.redo.borrow_mut().push(current);
					*self.html.borrow_mut() = prev;
				}
			}
			FormatCommand::Redo => {
				if let Some(next) = self.redo.borrow_mut().pop() {
					self.undo.borrow_mut().push(current);
					*self.html.borrow_mut() = next;
				}
			}
			FormatCommand::Bold => {
				self.undo.borrow_mut().push(current.clone());
				self.redo.borrow_mut().clear();
				let mut active = self.active.borrow_mut();
				active.bold = !active.bold;
				*self.html.borrow_mut() = if active.bold {
					format!("<b>{current}</b>")
				} else {
					current.trim_start_matches("<b>").trim_end_matches("</b>").to_owned()
				};
			}
			_ => {}
		}
	}

	fn content(&self) -> String {
		self.html.borrow().clone()
	}

	fn set_content(&self, html: &str) {
		*self.html.borrow_mut() = html.to_owned();
	}

	fn active_formats(&self) -> ActiveFormats {
		*self.active.borrow()
	}

	fn history(&self) -> HistoryState {
		HistoryState {
			can_undo: !self.undo.borrow().is_empty(),
			can_redo: !self.redo.borrow().is_empty(),
		}
	}
}

fn with_text(text: &str) -> FakeBackend {
	let backend = FakeBackend::default();
	backend.set_content(text);
	backend
}

// =============================================================
// run
// =============================================================

#[test]
fn run_reports_content_formats_and_history() {
	let backend = with_text("hola");
	let snap = run(&backend, FormatCommand::Bold);
	assert_eq!(snap.html, "<b>hola</b>");
	assert!(snap.active.bold);
	assert!(snap.history.can_undo);
	assert!(!snap.history.can_redo);
}

#[test]
fn undo_and_redo_walk_history() {
	let backend = with_text("hola");
	run(&backend, FormatCommand::Bold);
	let undone = run(&backend, FormatCommand::Undo);
	assert_eq!(undone.html, "hola");
	assert!(undone.history.can_redo);
	let redone = run(&backend, FormatCommand::Redo);
	assert_eq!(redone.html, "<b>hola</b>");
}

#[test]
fn disabled_history_commands_are_not_applied() {
	let backend = with_text("hola");
	let snap = run(&backend, FormatCommand::Undo);
	assert_eq!(snap.html, "hola");
	assert!(backend.applied.borrow().is_empty());
}

#[test]
fn run_works_through_trait_objects() {
	let backend = with_text("x");
	let dyn_backend: &dyn EditorBackend = &backend;
	assert_eq!(run(dyn_backend, FormatCommand::Bold).html, "<b>x</b>");
}

// =============================================================
// sync_content
// =============================================================

#[test]
fn sync_content_only_writes_changes() {
	let backend = with_text("<p>a</p>");
	assert!(!sync_content(&backend, "<p>a</p>"));
	assert!(sync_content(&backend, ""));
	assert_eq!(snapshot(&backend).html, "");
}
