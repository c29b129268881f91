//! JSON values in the browser's `localStorage`.
//!
//! Reads fall back to the caller's default when the key is missing, the
//! stored text does not parse, or storage is unavailable. Writes that fail
//! (quota, private mode) are dropped. Both are logged at debug level and
//! never surface to the caller.

use std::cell::RefCell;
use std::collections::HashMap;

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::STORAGE_PREFIX;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Why a storage call failed.
#[derive(Debug, Error)]
pub enum StorageError {
	/// The window has no `localStorage`.
	#[error("local storage is unavailable")]
	Unavailable,
	/// The backend rejected the call.
	#[error("storage backend error: {0}")]
	Backend(String),
	/// The value could not be converted to or from JSON.
	#[error("storage value is not valid JSON: {0}")]
	Json(#[from] serde_json::Error),
}

/// A string key-value store.
pub trait StorageBackend {
	/// Reads a raw value.
	fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
	/// Writes a raw value.
	fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
	/// Deletes a value.
	fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
	fn storage() -> Result<web_sys::Storage, StorageError> {
		web_sys::window()
			.and_then(|w| w.local_storage().ok().flatten())
			.ok_or(StorageError::Unavailable)
	}
}

fn js_error(err: wasm_bindgen::JsValue) -> StorageError {
	StorageError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl StorageBackend for BrowserStorage {
	fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
		Self::storage()?.get_item(key).map_err(js_error)
	}

	fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
		Self::storage()?.set_item(key, value).map_err(js_error)
	}

	fn remove_item(&self, key: &str) -> Result<(), StorageError> {
		Self::storage()?.remove_item(key).map_err(js_error)
	}
}

/// In-process store. Optionally rejects every call, to stand in for a full
/// or disabled browser store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
	items: RefCell<HashMap<String, String>>,
	failing: bool,
}

impl MemoryStorage {
	/// A store whose every call fails.
	pub fn failing() -> Self {
		Self {
			items: RefCell::default(),
			failing: true,
		}
	}

	fn check(&self) -> Result<(), StorageError> {
		if self.failing {
			return Err(StorageError::Backend("quota exceeded".into()));
		}
		Ok(())
	}
}

impl StorageBackend for MemoryStorage {
	fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
		self.check()?;
		Ok(self.items.borrow().get(key).cloned())
	}

	fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
		self.check()?;
		self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
		Ok(())
	}

	fn remove_item(&self, key: &str) -> Result<(), StorageError> {
		self.check()?;
		self.items.borrow_mut().remove(key);
		Ok(())
	}
}

/// Typed, fail-soft view over a [`StorageBackend`]. Every key is namespaced
/// with a prefix.
#[derive(Clone, Copy, Debug)]
pub struct LocalCache<B = BrowserStorage> {
	backend: B,
	prefix: &'static str,
}

impl LocalCache<BrowserStorage> {
	/// The app's cache over `window.localStorage`.
	pub fn browser() -> Self {
		Self::with_backend(BrowserStorage, STORAGE_PREFIX)
	}
}

impl<B: StorageBackend> LocalCache<B> {
	/// A cache over any backend.
	pub fn with_backend(backend: B, prefix: &'static str) -> Self {
		Self { backend, prefix }
	}

	fn full_key(&self, key: &str) -> String {
		format!("{}{key}", self.prefix)
	}

	fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
		match self.backend.get_item(&self.full_key(key))? {
			Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
			None => Ok(None),
		}
	}

	/// The stored value, or `default` when absent or unreadable.
	pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
		match self.try_get(key) {
			Ok(Some(value)) => value,
			Ok(None) => default,
			Err(err) => {
				debug!("Storage read of `{key}` failed, using default: {err}");
				default
			}
		}
	}

	/// Stores `value`; failures are logged and ignored.
	pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
		let result = serde_json::to_string(value)
			.map_err(StorageError::from)
			.and_then(|raw| self.backend.set_item(&self.full_key(key), &raw));
		if let Err(err) = result {
			debug!("Storage write of `{key}` dropped: {err}");
		}
	}

	/// Deletes `key`; failures are logged and ignored.
	pub fn remove(&self, key: &str) {
		if let Err(err) = self.backend.remove_item(&self.full_key(key)) {
			debug!("Storage remove of `{key}` dropped: {err}");
		}
	}
}
