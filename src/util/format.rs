use std::borrow::Cow;

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Appended to text that was cut short.
pub const ELLIPSIS: &str = "...";

/// Output of [`truncate_text`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Truncated<'a> {
	/// Display text, with [`ELLIPSIS`] appended when cut.
	pub text: Cow<'a, str>,
	/// Whether anything was cut.
	pub truncated: bool,
}

/// Keeps the first `max_chars` characters of `text`, adding an ellipsis
/// when anything was dropped. Counts characters, not bytes.
pub fn truncate_text(text: &str, max_chars: usize) -> Truncated<'_> {
	match text.char_indices().nth(max_chars) {
		None => Truncated {
			text: Cow::Borrowed(text),
			truncated: false,
		},
		Some((cut, _)) => Truncated {
			text: Cow::Owned(format!("{}{ELLIPSIS}", &text[..cut])),
			truncated: true,
		},
	}
}
