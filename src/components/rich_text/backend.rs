//! Editing engine seam. The toolbar and component only talk to an
//! [`EditorBackend`]; the browser's built-in editing commands are the one
//! production implementation.

use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlElement};

use super::commands::{ActiveFormats, Align, Block, FormatCommand, HistoryState};

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

pub trait EditorBackend {
	/// Applies one toolbar command at the current selection.
	fn apply(&self, command: FormatCommand);
	/// Serialized HTML of the document.
	fn content(&self) -> String;
	/// Replaces the whole document.
	fn set_content(&self, html: &str);
	fn active_formats(&self) -> ActiveFormats;
	fn history(&self) -> HistoryState;
}

/// What the toolbar needs to redraw after an edit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorSnapshot {
	pub html: String,
	pub active: ActiveFormats,
	pub history: HistoryState,
}

pub fn snapshot<B: EditorBackend + ?Sized>(backend: &B) -> EditorSnapshot {
	EditorSnapshot {
		html: backend.content(),
		active: backend.active_formats(),
		history: backend.history(),
	}
}

/// Runs a toolbar command. Disabled commands are skipped, but the snapshot
/// is still taken so the caller can redraw.
pub fn run<B: EditorBackend + ?Sized>(backend: &B, command: FormatCommand) -> EditorSnapshot {
	if command.is_enabled(&backend.history()) {
		backend.apply(command);
	}
	snapshot(backend)
}

/// Sets the document unless it already holds `html`; returns whether it
/// changed.
pub fn sync_content<B: EditorBackend + ?Sized>(backend: &B, html: &str) -> bool {
	if backend.content() == html {
		return false;
	}
	backend.set_content(html);
	true
}

/// `contenteditable` element driven through `document.execCommand`.
pub struct ExecCommandBackend {
	root: HtmlElement,
	document: HtmlDocument,
}

impl ExecCommandBackend {
	pub fn new(root: HtmlElement) -> Option<Self> {
		let document = root.owner_document()?.dyn_into::<HtmlDocument>().ok()?;
		Some(Self { root, document })
	}

	fn state(&self, name: &str) -> bool {
		self.document.query_command_state(name).unwrap_or(false)
	}

	fn enabled(&self, name: &str) -> bool {
		self.document.query_command_enabled(name).unwrap_or(false)
	}

	/// The document-level queries answer for wherever the selection is, so
	/// formats are only reported while the editor holds focus.
	fn has_focus(&self) -> bool {
		self.document
			.active_element()
			.is_some_and(|el| self.root.contains(Some(&*el)))
	}
}

impl EditorBackend for ExecCommandBackend {
	fn apply(&self, command: FormatCommand) {
		let _ = self.root.focus();
		let (name, value) = command.exec(&self.active_formats());
		let result = match value {
			Some(value) => self
				.document
				.exec_command_with_show_ui_and_value(name, false, value),
			None => self.document.exec_command(name),
		};
		match result {
			Ok(true) => {}
			Ok(false) => log::debug!("Editor command {name} had no effect"),
			Err(err) => log::warn!("Editor command {name} failed: {err:?}"),
		}
	}

	fn content(&self) -> String {
		self.root.inner_html()
	}

	fn set_content(&self, html: &str) {
		self.root.set_inner_html(html);
	}

	fn active_formats(&self) -> ActiveFormats {
		if !self.has_focus() {
			return ActiveFormats::default();
		}
		let block = self
			.document
			.query_command_value("formatBlock")
			.map(|tag| Block::from_tag(&tag))
			.unwrap_or(Block::Paragraph);
		let align = [
			("justifyCenter", Align::Center),
			("justifyRight", Align::Right),
			("justifyLeft", Align::Left),
		]
		.into_iter()
		.find(|(name, _)| self.state(name))
		.map(|(_, align)| align);
		ActiveFormats {
			bold: self.state("bold"),
			italic: self.state("italic"),
			underline: self.state("underline"),
			strike: self.state("strikeThrough"),
			block,
			align,
			bullet_list: self.state("insertUnorderedList"),
			ordered_list: self.state("insertOrderedList"),
		}
	}

	fn history(&self) -> HistoryState {
		HistoryState {
			can_undo: self.enabled("undo"),
			can_redo: self.enabled("redo"),
		}
	}
}
