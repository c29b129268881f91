//! Path constants shared by the router and the header navigation.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME: &str = "/";
pub const START: &str = "/comenzar";
/// English alias of [`START`].
pub const START_ALIAS: &str = "/start";

/// Header navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
	pub label: &'static str,
	pub href: &'static str,
	/// Other paths that show the same page.
	pub aliases: &'static [&'static str],
}

pub const NAV: &[NavItem] = &[
	NavItem {
		label: "Inicio",
		href: HOME,
		aliases: &[],
	},
	NavItem {
		label: "Comandos",
		href: START,
		aliases: &[START_ALIAS],
	},
];

impl NavItem {
	/// Whether `pathname` shows the page this item links to. One trailing
	/// slash is ignored.
	pub fn is_active(&self, pathname: &str) -> bool {
		let path = match pathname.strip_suffix('/') {
			Some(trimmed) if !trimmed.is_empty() => trimmed,
			_ => pathname,
		};
		path == self.href || self.aliases.contains(&path)
	}
}
