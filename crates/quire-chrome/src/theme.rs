// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Persisted light/dark theme preference.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::error::{PreferenceError, PreferenceResult};

/// Storage key holding the selected theme.
pub const THEME_KEY: &str = "theme";

const LIGHT_VALUE: &str = "light";

/// String key/value storage that survives page loads.
pub trait PreferenceStore: Send + Sync {
	fn get(&self, key: &str) -> PreferenceResult<Option<String>>;
	fn set(&self, key: &str, value: &str) -> PreferenceResult<()>;
}

#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
	values: Mutex<BTreeMap<String, String>>,
}

impl PreferenceStore for MemoryPreferenceStore {
	fn get(&self, key: &str) -> PreferenceResult<Option<String>> {
		Ok(self.values.lock().get(key).cloned())
	}

	fn set(&self, key: &str, value: &str) -> PreferenceResult<()> {
		self.values.lock().insert(key.to_string(), value.to_string());
		Ok(())
	}
}

/// Preferences kept in a small JSON object on disk.
#[derive(Debug)]
pub struct FilePreferenceStore {
	path: PathBuf,
	lock: Mutex<()>,
}

impl FilePreferenceStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			lock: Mutex::new(()),
		}
	}

	fn read_all(&self) -> PreferenceResult<BTreeMap<String, String>> {
		let content = match std::fs::read_to_string(&self.path) {
			Ok(content) => content,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				debug!(path = %self.path.display(), "preference file not found");
				return Ok(BTreeMap::new());
			}
			Err(e) => {
				return Err(PreferenceError::Io {
					path: self.path.clone(),
					source: e,
				})
			}
		};
		serde_json::from_str(&content).map_err(|e| PreferenceError::Corrupt {
			path: self.path.clone(),
			source: e,
		})
	}
}

impl PreferenceStore for FilePreferenceStore {
	fn get(&self, key: &str) -> PreferenceResult<Option<String>> {
		let _guard = self.lock.lock();
		Ok(self.read_all()?.remove(key))
	}

	fn set(&self, key: &str, value: &str) -> PreferenceResult<()> {
		let _guard = self.lock.lock();
		let mut values = self.read_all()?;
		values.insert(key.to_string(), value.to_string());

		let io_err = |e| PreferenceError::Io {
			path: self.path.clone(),
			source: e,
		};
		if let Some(parent) = self.path.parent() {
			std::fs::create_dir_all(parent).map_err(io_err)?;
		}
		let json = serde_json::to_string_pretty(&values)?;
		std::fs::write(&self.path, json).map_err(io_err)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
	Light,
	Dark,
}

impl Theme {
	pub fn toggled(self) -> Self {
		match self {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		}
	}
}

/// Theme switch backed by a [`PreferenceStore`].
pub struct ThemeToggle {
	store: Arc<dyn PreferenceStore>,
	dark_value: String,
}

impl ThemeToggle {
	pub fn new(store: Arc<dyn PreferenceStore>, dark_value: impl Into<String>) -> Self {
		Self {
			store,
			dark_value: dark_value.into(),
		}
	}

	/// Saved theme; anything other than the dark value reads as light.
	pub fn current(&self) -> PreferenceResult<Theme> {
		let saved = self.store.get(THEME_KEY)?;
		Ok(match saved {
			Some(value) if value == self.dark_value => Theme::Dark,
			_ => Theme::Light,
		})
	}

	/// Value for the document's `data-theme` attribute.
	pub fn attribute_value(&self, theme: Theme) -> &str {
		match theme {
			Theme::Dark => &self.dark_value,
			Theme::Light => LIGHT_VALUE,
		}
	}

	pub fn set(&self, theme: Theme) -> PreferenceResult<()> {
		let value = self.attribute_value(theme).to_string();
		self.store.set(THEME_KEY, &value)?;
		info!(theme = %value, "theme preference saved");
		Ok(())
	}

	pub fn toggle(&self) -> PreferenceResult<Theme> {
		let next = self.current()?.toggled();
		self.set(next)?;
		Ok(next)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn toggle_with(store: Arc<dyn PreferenceStore>) -> ThemeToggle {
		ThemeToggle::new(store, "dark")
	}

	#[test]
	fn test_defaults_to_light() {
		let toggle = toggle_with(Arc::new(MemoryPreferenceStore::default()));
		assert_eq!(toggle.current().unwrap(), Theme::Light);
	}

	#[test]
	fn test_toggle_persists_value() {
		let store = Arc::new(MemoryPreferenceStore::default());
		let toggle = toggle_with(store.clone());

		assert_eq!(toggle.toggle().unwrap(), Theme::Dark);
		assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

		assert_eq!(toggle.toggle().unwrap(), Theme::Light);
		assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
	}

	#[test]
	fn test_unknown_value_reads_as_light() {
		let store = Arc::new(MemoryPreferenceStore::default());
		store.set(THEME_KEY, "solarized").unwrap();
		assert_eq!(toggle_with(store).current().unwrap(), Theme::Light);
	}

	#[test]
	fn test_custom_dark_value() {
		let store = Arc::new(MemoryPreferenceStore::default());
		let toggle = ThemeToggle::new(store.clone(), "night");
		toggle.set(Theme::Dark).unwrap();
		assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("night"));
		assert_eq!(toggle.current().unwrap(), Theme::Dark);
	}

	#[test]
	fn test_file_store_round_trip() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested").join("prefs.json");
		let store = FilePreferenceStore::new(&path);

		assert_eq!(store.get(THEME_KEY).unwrap(), None);
		store.set(THEME_KEY, "dark").unwrap();
		store.set("other", "value").unwrap();

		let reopened = FilePreferenceStore::new(&path);
		assert_eq!(reopened.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
		assert_eq!(reopened.get("other").unwrap().as_deref(), Some("value"));
	}

	#[test]
	fn test_file_store_reports_corruption() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("prefs.json");
		std::fs::write(&path, "{not json").unwrap();

		let err = FilePreferenceStore::new(&path).get(THEME_KEY).unwrap_err();
		assert!(matches!(err, PreferenceError::Corrupt { .. }));
	}
}
