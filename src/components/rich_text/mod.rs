//! Rich text editing: a toolbar over a pluggable editing engine.

mod backend;
mod commands;
mod component;

pub use backend::{EditorBackend, EditorSnapshot};
pub use commands::{ActiveFormats, Align, Block, FormatCommand, HistoryState};
pub use component::RichTextEditor;
