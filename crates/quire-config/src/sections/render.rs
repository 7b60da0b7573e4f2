// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Result card rendering configuration section.

use quire_search_core::{DEFAULT_BADGE_LABEL, DEFAULT_PLACEHOLDER_IMAGE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RenderConfigLayer {
	pub placeholder_image: Option<String>,
	pub default_image_alt: Option<String>,
	pub badge_label: Option<String>,
}

impl RenderConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.placeholder_image.is_some() {
			self.placeholder_image = other.placeholder_image;
		}
		if other.default_image_alt.is_some() {
			self.default_image_alt = other.default_image_alt;
		}
		if other.badge_label.is_some() {
			self.badge_label = other.badge_label;
		}
	}

	pub fn finalize(self) -> RenderConfig {
		RenderConfig {
			placeholder_image: self
				.placeholder_image
				.unwrap_or_else(|| DEFAULT_PLACEHOLDER_IMAGE.to_string()),
			default_image_alt: self.default_image_alt.unwrap_or_default(),
			badge_label: self
				.badge_label
				.unwrap_or_else(|| DEFAULT_BADGE_LABEL.to_string()),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderConfig {
	pub placeholder_image: String,
	pub default_image_alt: String,
	pub badge_label: String,
}

impl Default for RenderConfig {
	fn default() -> Self {
		RenderConfigLayer::default().finalize()
	}
}
