// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration layer for merging from multiple sources.

use serde::Deserialize;

use crate::sections::{
	LoggingConfigLayer, NavbarConfigLayer, RenderConfigLayer, SearchConfigLayer, ThemeConfigLayer,
};

/// Configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct QuireConfigLayer {
	#[serde(default)]
	pub search: Option<SearchConfigLayer>,
	#[serde(default)]
	pub render: Option<RenderConfigLayer>,
	#[serde(default)]
	pub navbar: Option<NavbarConfigLayer>,
	#[serde(default)]
	pub theme: Option<ThemeConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl QuireConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: QuireConfigLayer) {
		merge_option(&mut self.search, other.search, SearchConfigLayer::merge);
		merge_option(&mut self.render, other.render, RenderConfigLayer::merge);
		merge_option(&mut self.navbar, other.navbar, NavbarConfigLayer::merge);
		merge_option(&mut self.theme, other.theme, ThemeConfigLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_option<T>(base: &mut Option<T>, other: Option<T>, merge: fn(&mut T, T)) {
	match (base.as_mut(), other) {
		(Some(b), Some(o)) => merge(b, o),
		(None, Some(o)) => *base = Some(o),
		_ => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_fills_missing_sections() {
		let mut base = QuireConfigLayer::default();
		base.merge(QuireConfigLayer {
			search: Some(SearchConfigLayer {
				batch_size: Some(25),
				..Default::default()
			}),
			..Default::default()
		});
		assert_eq!(base.search.unwrap().batch_size, Some(25));
	}

	#[test]
	fn test_merge_combines_sections() {
		let mut base = QuireConfigLayer {
			search: Some(SearchConfigLayer {
				debounce_ms: Some(100),
				..Default::default()
			}),
			..Default::default()
		};
		base.merge(QuireConfigLayer {
			search: Some(SearchConfigLayer {
				batch_size: Some(5),
				..Default::default()
			}),
			..Default::default()
		});
		let search = base.search.unwrap();
		assert_eq!(search.debounce_ms, Some(100));
		assert_eq!(search.batch_size, Some(5));
	}

	#[test]
	fn test_merge_with_empty_keeps_base() {
		let mut base = QuireConfigLayer {
			logging: Some(LoggingConfigLayer {
				level: Some("debug".to_string()),
				format: None,
			}),
			..Default::default()
		};
		let before = base.clone();
		base.merge(QuireConfigLayer::default());
		assert_eq!(base, before);
	}
}
