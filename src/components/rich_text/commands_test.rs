use super::*;

// =============================================================
// Block parsing
// =============================================================

#[test]
fn from_tag_recognizes_supported_blocks() {
	assert_eq!(Block::from_tag("h2"), Block::Heading(2));
	assert_eq!(Block::from_tag("H1"), Block::Heading(1));
	assert_eq!(Block::from_tag("blockquote"), Block::Blockquote);
	assert_eq!(Block::from_tag("pre"), Block::CodeBlock);
	assert_eq!(Block::from_tag("div"), Block::Paragraph);
	assert_eq!(Block::from_tag(""), Block::Paragraph);
	assert_eq!(Block::from_tag("h5"), Block::Other);
}

// =============================================================
// Command mapping
// =============================================================

#[test]
fn headings_toggle_back_to_paragraph() {
	let mut active = ActiveFormats::default();
	assert_eq!(FormatCommand::Heading(2).exec(&active), ("formatBlock", Some("<h2>")));
	active.block = Block::Heading(2);
	assert_eq!(FormatCommand::Heading(2).exec(&active), ("formatBlock", Some("<p>")));
	assert_eq!(FormatCommand::Heading(1).exec(&active), ("formatBlock", Some("<h1>")));
}

#[test]
fn quote_and_code_blocks_toggle() {
	let mut active = ActiveFormats::default();
	assert_eq!(FormatCommand::Blockquote.exec(&active).1, Some("<blockquote>"));
	assert_eq!(FormatCommand::CodeBlock.exec(&active).1, Some("<pre>"));
	active.block = Block::CodeBlock;
	assert_eq!(FormatCommand::CodeBlock.exec(&active).1, Some("<p>"));
}

#[test]
fn inline_commands_take_no_value() {
	let active = ActiveFormats::default();
	assert_eq!(FormatCommand::Strike.exec(&active), ("strikeThrough", None));
	assert_eq!(FormatCommand::Align(Align::Center).exec(&active), ("justifyCenter", None));
	assert_eq!(FormatCommand::OrderedList.exec(&active), ("insertOrderedList", None));
	assert_eq!(FormatCommand::Undo.exec(&active), ("undo", None));
}

// =============================================================
// Button state
// =============================================================

#[test]
fn active_state_follows_formats() {
	let active = ActiveFormats {
		bold: true,
		block: Block::Heading(3),
		align: Some(Align::Right),
		bullet_list: true,
		..ActiveFormats::default()
	};
	assert!(FormatCommand::Bold.is_active(&active));
	assert!(!FormatCommand::Italic.is_active(&active));
	assert!(FormatCommand::Heading(3).is_active(&active));
	assert!(!FormatCommand::Paragraph.is_active(&active));
	assert!(FormatCommand::Align(Align::Right).is_active(&active));
	assert!(!FormatCommand::Align(Align::Left).is_active(&active));
	assert!(FormatCommand::BulletList.is_active(&active));
	assert!(!FormatCommand::HorizontalRule.is_active(&active));
}

#[test]
fn history_buttons_disable_on_empty_stacks() {
	let empty = HistoryState::default();
	assert!(!FormatCommand::Undo.is_enabled(&empty));
	assert!(!FormatCommand::Redo.is_enabled(&empty));
	assert!(FormatCommand::Bold.is_enabled(&empty));

	let undo_only = HistoryState {
		can_undo: true,
		can_redo: false,
	};
	assert!(FormatCommand::Undo.is_enabled(&undo_only));
	assert!(!FormatCommand::Redo.is_enabled(&undo_only));
}

#[test]
fn toolbar_groups_cover_every_command_once() {
	let all: Vec<FormatCommand> = TOOLBAR.iter().flat_map(|g| g.iter().copied()).collect();
	assert_eq!(TOOLBAR.len(), 6);
	assert_eq!(all.len(), 18);
	for (i, cmd) in all.iter().enumerate() {
		assert!(!all[i + 1..].contains(cmd), "{cmd:?} listed twice");
		assert!(!cmd.label().is_empty());
		assert!(!cmd.title().is_empty());
	}
}
