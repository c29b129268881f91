//! Session-wide light/dark display mode.
//!
//! The store is created once at the root of the render tree and handed down
//! through context. Reading it from a component rendered outside that tree
//! is a programming error and is reported as [`ThemeError::NotProvided`].

use leptos::prelude::*;
use log::{debug, error};
use thiserror::Error;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Display mode applied to the `<html data-theme>` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	/// Light background (default).
	#[default]
	Light,
	/// Dark background.
	Dark,
}

impl ThemeMode {
	/// The other mode.
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	/// Value for the `data-theme` attribute.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	/// Whether this is [`ThemeMode::Dark`].
	pub fn is_dark(self) -> bool {
		self == Self::Dark
	}
}

/// Theme accessor failures.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ThemeError {
	/// No [`ThemeStore`] was provided above the calling component.
	#[error("theme store used outside of the app root that provides it")]
	NotProvided,
}

/// Reactive handle to the current [`ThemeMode`]. Cheap to copy.
#[derive(Clone, Copy, Debug)]
pub struct ThemeStore {
	mode: RwSignal<ThemeMode>,
}

impl ThemeStore {
	/// Creates a store without publishing it.
	pub fn new(initial: ThemeMode) -> Self {
		Self {
			mode: RwSignal::new(initial),
		}
	}

	/// Creates a store and provides it to every descendant of the current
	/// owner.
	pub fn provide(initial: ThemeMode) -> Self {
		let store = Self::new(initial);
		provide_context(store);
		store
	}

	/// Current mode, tracked by the calling reactive scope.
	pub fn mode(&self) -> ThemeMode {
		self.mode.get()
	}

	/// Current mode without subscribing.
	pub fn mode_untracked(&self) -> ThemeMode {
		self.mode.get_untracked()
	}

	/// Flips between light and dark.
	pub fn toggle(&self) {
		self.mode.update(|m| *m = m.toggled());
		debug!("Theme switched to {}", self.mode.get_untracked().as_str());
	}
}

/// Looks up the [`ThemeStore`] provided by the app root.
pub fn use_theme() -> Result<ThemeStore, ThemeError> {
	use_context::<ThemeStore>().ok_or(ThemeError::NotProvided)
}

/// [`use_theme`] for readers that can render without a store: the misuse
/// is logged and `None` returned.
pub fn try_use_theme() -> Option<ThemeStore> {
	use_theme().inspect_err(|err| error!("{err}")).ok()
}
