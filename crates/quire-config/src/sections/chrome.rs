// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Navbar and theme configuration sections.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NavbarConfigLayer {
	pub element_id: Option<String>,
	pub offset_px: Option<u32>,
}

impl NavbarConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.element_id.is_some() {
			self.element_id = other.element_id;
		}
		if other.offset_px.is_some() {
			self.offset_px = other.offset_px;
		}
	}

	pub fn finalize(self) -> NavbarConfig {
		NavbarConfig {
			element_id: self.element_id.unwrap_or_else(|| "navbar".to_string()),
			offset_px: self.offset_px.unwrap_or(64),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavbarConfig {
	pub element_id: String,
	pub offset_px: u32,
}

impl Default for NavbarConfig {
	fn default() -> Self {
		NavbarConfigLayer::default().finalize()
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfigLayer {
	pub dark_value: Option<String>,
	pub store_path: Option<PathBuf>,
}

impl ThemeConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.dark_value.is_some() {
			self.dark_value = other.dark_value;
		}
		if other.store_path.is_some() {
			self.store_path = other.store_path;
		}
	}

	pub fn finalize(self) -> ThemeConfig {
		ThemeConfig {
			dark_value: self.dark_value.unwrap_or_else(|| "dark".to_string()),
			store_path: self.store_path.or_else(default_store_path),
		}
	}
}

fn default_store_path() -> Option<PathBuf> {
	dirs::data_dir().map(|d| d.join("quire").join("preferences.json"))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
	/// Value stored when the dark theme is selected.
	pub dark_value: String,
	pub store_path: Option<PathBuf>,
}

impl Default for ThemeConfig {
	fn default() -> Self {
		ThemeConfigLayer::default().finalize()
	}
}
