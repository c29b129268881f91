//! Toolbar vocabulary and how each entry maps onto browser editing
//! commands.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

/// Block type at the caret.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
	Paragraph,
	Heading(u8),
	Blockquote,
	CodeBlock,
	Other,
}

impl Block {
	/// Parses the tag name reported for the current block, e.g. `h2`.
	pub fn from_tag(tag: &str) -> Self {
		match tag.trim().to_ascii_lowercase().as_str() {
			"p" | "div" | "" => Self::Paragraph,
			"h1" => Self::Heading(1),
			"h2" => Self::Heading(2),
			"h3" => Self::Heading(3),
			"blockquote" => Self::Blockquote,
			"pre" => Self::CodeBlock,
			_ => Self::Other,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
	Left,
	Center,
	Right,
}

/// Formatting state at the caret.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveFormats {
	pub bold: bool,
	pub italic: bool,
	pub underline: bool,
	pub strike: bool,
	pub block: Block,
	pub align: Option<Align>,
	pub bullet_list: bool,
	pub ordered_list: bool,
}

impl Default for ActiveFormats {
	fn default() -> Self {
		Self {
			bold: false,
			italic: false,
			underline: false,
			strike: false,
			block: Block::Paragraph,
			align: None,
			bullet_list: false,
			ordered_list: false,
		}
	}
}

/// Whether the undo and redo stacks have entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HistoryState {
	pub can_undo: bool,
	pub can_redo: bool,
}

/// One toolbar action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatCommand {
	Heading(u8),
	Paragraph,
	Bold,
	Italic,
	Underline,
	Strike,
	Align(Align),
	BulletList,
	OrderedList,
	Blockquote,
	CodeBlock,
	HorizontalRule,
	Undo,
	Redo,
}

/// Toolbar layout, one slice per button group.
pub const TOOLBAR: &[&[FormatCommand]] = &[
	&[
		FormatCommand::Heading(1),
		FormatCommand::Heading(2),
		FormatCommand::Heading(3),
		FormatCommand::Paragraph,
	],
	&[
		FormatCommand::Bold,
		FormatCommand::Italic,
		FormatCommand::Underline,
		FormatCommand::Strike,
	],
	&[
		FormatCommand::Align(Align::Left),
		FormatCommand::Align(Align::Center),
		FormatCommand::Align(Align::Right),
	],
	&[FormatCommand::BulletList, FormatCommand::OrderedList],
	&[
		FormatCommand::Blockquote,
		FormatCommand::CodeBlock,
		FormatCommand::HorizontalRule,
	],
	&[FormatCommand::Undo, FormatCommand::Redo],
];

impl FormatCommand {
	/// Editing command name and value to run, given the current state.
	/// Block toggles fall back to a plain paragraph when already active.
	pub fn exec(self, active: &ActiveFormats) -> (&'static str, Option<&'static str>) {
		match self {
			Self::Heading(level) if active.block == Block::Heading(level) => {
				("formatBlock", Some("<p>"))
			}
			Self::Heading(1) => ("formatBlock", Some("<h1>")),
			Self::Heading(2) => ("formatBlock", Some("<h2>")),
			Self::Heading(_) => ("formatBlock", Some("<h3>")),
			Self::Paragraph => ("formatBlock", Some("<p>")),
			Self::Bold => ("bold", None),
			Self::Italic => ("italic", None),
			Self::Underline => ("underline", None),
			Self::Strike => ("strikeThrough", None),
			Self::Align(Align::Left) => ("justifyLeft", None),
			Self::Align(Align::Center) => ("justifyCenter", None),
			Self::Align(Align::Right) => ("justifyRight", None),
			Self::BulletList => ("insertUnorderedList", None),
			Self::OrderedList => ("insertOrderedList", None),
			Self::Blockquote if active.block == Block::Blockquote => ("formatBlock", Some("<p>")),
			Self::Blockquote => ("formatBlock", Some("<blockquote>")),
			Self::CodeBlock if active.block == Block::CodeBlock => ("formatBlock", Some("<p>")),
			Self::CodeBlock => ("formatBlock", Some("<pre>")),
			Self::HorizontalRule => ("insertHorizontalRule", None),
			Self::Undo => ("undo", None),
			Self::Redo => ("redo", None),
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Heading(1) => "H1",
			Self::Heading(2) => "H2",
			Self::Heading(_) => "H3",
			Self::Paragraph => "P",
			Self::Bold => "B",
			Self::Italic => "I",
			Self::Underline => "U",
			Self::Strike => "S",
			Self::Align(Align::Left) => "⬅",
			Self::Align(Align::Center) => "↔",
			Self::Align(Align::Right) => "➡",
			Self::BulletList => "•",
			Self::OrderedList => "1.",
			Self::Blockquote => "\"",
			Self::CodeBlock => "<>",
			Self::HorizontalRule => "─",
			Self::Undo => "↶",
			Self::Redo => "↷",
		}
	}

	/// Tooltip.
	pub fn title(self) -> &'static str {
		match self {
			Self::Heading(1) => "Título 1",
			Self::Heading(2) => "Título 2",
			Self::Heading(_) => "Título 3",
			Self::Paragraph => "Párrafo",
			Self::Bold => "Negrita",
			Self::Italic => "Cursiva",
			Self::Underline => "Subrayado",
			Self::Strike => "Tachado",
			Self::Align(Align::Left) => "Alinear a la izquierda",
			Self::Align(Align::Center) => "Centrar",
			Self::Align(Align::Right) => "Alinear a la derecha",
			Self::BulletList => "Lista con viñetas",
			Self::OrderedList => "Lista numerada",
			Self::Blockquote => "Cita",
			Self::CodeBlock => "Bloque de código",
			Self::HorizontalRule => "Línea horizontal",
			Self::Undo => "Deshacer",
			Self::Redo => "Rehacer",
		}
	}

	/// Whether the button shows as pressed.
	pub fn is_active(self, active: &ActiveFormats) -> bool {
		match self {
			Self::Heading(level) => active.block == Block::Heading(level),
			Self::Paragraph => active.block == Block::Paragraph,
			Self::Bold => active.bold,
			Self::Italic => active.italic,
			Self::Underline => active.underline,
			Self::Strike => active.strike,
			Self::Align(align) => active.align == Some(align),
			Self::BulletList => active.bullet_list,
			Self::OrderedList => active.ordered_list,
			Self::Blockquote => active.block == Block::Blockquote,
			Self::CodeBlock => active.block == Block::CodeBlock,
			Self::HorizontalRule | Self::Undo | Self::Redo => false,
		}
	}

	/// Only undo and redo are ever disabled, when their stack is empty.
	pub fn is_enabled(self, history: &HistoryState) -> bool {
		match self {
			Self::Undo => history.can_undo,
			Self::Redo => history.can_redo,
			_ => true,
		}
	}
}
