//! Build-time configuration.
//!
//! A WASM bundle has no process environment at runtime, so overrides are
//! read from the environment of the `cargo`/`trunk` build:
//!
//! - `LEARN_GIT_API_BASE_URL`: base URL for [`crate::net::api`].
//! - `LEARN_GIT_LOG_LEVEL`: `error`, `warn`, `info`, `debug` or `trace`.

use log::Level;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Prefix of every key this app writes to `localStorage`.
pub const STORAGE_PREFIX: &str = "learn_git.";

/// Used when `LEARN_GIT_API_BASE_URL` is unset or blank.
pub const DEFAULT_API_BASE_URL: &str = "https://api.example.com";

/// Resolved application settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
	/// Base URL prepended to every API endpoint, without a trailing slash.
	pub api_base_url: String,
	/// Maximum level passed to the console logger.
	pub log_level: Level,
}

impl AppConfig {
	/// Settings captured when the bundle was built.
	pub fn from_build_env() -> Self {
		Self::resolve(
			option_env!("LEARN_GIT_API_BASE_URL"),
			option_env!("LEARN_GIT_LOG_LEVEL"),
		)
	}

	fn resolve(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
		let api_base_url = api_base_url
			.map(str::trim)
			.filter(|s| !s.is_empty())
			.unwrap_or(DEFAULT_API_BASE_URL)
			.trim_end_matches('/')
			.to_owned();
		let log_level = log_level
			.and_then(|s| s.trim().parse().ok())
			.unwrap_or_else(default_log_level);
		Self {
			api_base_url,
			log_level,
		}
	}
}

impl Default for AppConfig {
	fn default() -> Self {
		Self::resolve(None, None)
	}
}

fn default_log_level() -> Level {
	if cfg!(debug_assertions) {
		Level::Debug
	} else {
		Level::Info
	}
}
