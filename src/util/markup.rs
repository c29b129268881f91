//! Plain-text checks on editor HTML for the manual-entry tab.

use super::format::truncate_text;

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

/// Characters of stripped text echoed back on submission.
pub const EXCERPT_CHARS: usize = 100;

const ENTITIES: &[(&str, &str)] = &[
	("&nbsp;", "\u{a0}"),
	("&lt;", "<"),
	("&gt;", ">"),
	("&quot;", "\""),
	("&#39;", "'"),
	("&amp;", "&"),
];

/// Removes every `<...>` tag, decodes the basic HTML entities and trims
/// surrounding whitespace. An unterminated `<` is kept as text.
pub fn strip_markup(html: &str) -> String {
	let mut out = String::with_capacity(html.len());
	let mut rest = html;
	while let Some(start) = rest.find('<') {
		let Some(len) = rest[start..].find('>') else {
			break;
		};
		out.push_str(&rest[..start]);
		rest = &rest[start + len + 1..];
	}
	out.push_str(rest);

	let decoded = ENTITIES
		.iter()
		.fold(out, |acc, (entity, ch)| acc.replace(entity, ch));
	decoded.trim().to_owned()
}

/// Whether editor HTML holds anything worth previewing.
pub fn has_preview(html: &str) -> bool {
	!matches!(html.trim(), "" | "<p></p>" | "<br>" | "<p><br></p>")
}

/// Outcome of pressing "process" on the manual-entry tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
	/// Nothing but markup or whitespace was entered.
	Empty,
	/// Text was entered; `excerpt` holds at most [`EXCERPT_CHARS`] of it.
	Accepted {
		/// Leading text, with an ellipsis when cut.
		excerpt: String,
	},
}

impl Submission {
	/// Classifies editor HTML.
	pub fn evaluate(html: &str) -> Self {
		let text = strip_markup(html);
		if text.is_empty() {
			return Self::Empty;
		}
		Self::Accepted {
			excerpt: truncate_text(&text, EXCERPT_CHARS).text.into_owned(),
		}
	}

	/// Message shown to the user.
	pub fn message(&self) -> String {
		match self {
			Self::Empty => "Por favor, ingresa algún contenido antes de procesar".to_owned(),
			Self::Accepted { excerpt } => format!("Contenido procesado: {excerpt}"),
		}
	}
}
