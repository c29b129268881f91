use super::*;

#[test]
fn short_descriptions_are_untouched() {
	let text = "a".repeat(DEFAULT_DESCRIPTION_LENGTH);
	assert_eq!(
		card_description(&text, DEFAULT_DESCRIPTION_LENGTH, true),
		(text.clone(), false)
	);
}

#[test]
fn long_descriptions_are_cut_with_view_more() {
	let text = "b".repeat(DEFAULT_DESCRIPTION_LENGTH + 1);
	let (shown, more) = card_description(&text, DEFAULT_DESCRIPTION_LENGTH, true);
	assert_eq!(shown, format!("{}...", "b".repeat(DEFAULT_DESCRIPTION_LENGTH)));
	assert!(more);
}

#[test]
fn view_more_can_be_disabled() {
	let (shown, more) = card_description("abcdef", 3, false);
	assert_eq!(shown, "abc...");
	assert!(!more);
}
