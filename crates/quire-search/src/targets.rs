// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Presentation targets the controller writes to.
//!
//! A page exposes four regions: the status line, the results list, the
//! fallback ("explorer") panel and the "load more" trigger. The controller
//! only ever touches them through [`PresentationTargets`], so the same logic
//! drives a browser DOM binding or the in-memory [`MemoryTargets`].

use parking_lot::Mutex;

use crate::render::Fragment;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
	Status,
	Results,
	Fallback,
}

pub trait PresentationTargets: Send + Sync {
	/// Empties a region.
	fn clear(&self, region: Region);

	/// Replaces the status region's markup.
	fn set_status_html(&self, html: &str);

	/// Appends a rendered result to the results list. Implementations may
	/// post-process the inserted node (for example to bind navigation).
	fn append_fragment(&self, fragment: &Fragment);

	fn set_load_more_visible(&self, visible: bool);

	/// Current markup of the fallback panel.
	fn fallback_snapshot(&self) -> String;

	/// Puts previously captured markup back into the fallback panel.
	fn restore_fallback(&self, snapshot: &str);
}

#[derive(Debug, Default)]
struct MemoryState {
	status_html: String,
	fragments: Vec<Fragment>,
	fallback_html: String,
	load_more_visible: bool,
}

/// Headless presentation targets backed by plain strings.
#[derive(Debug, Default)]
pub struct MemoryTargets {
	state: Mutex<MemoryState>,
}

impl MemoryTargets {
	pub fn new(fallback_html: impl Into<String>) -> Self {
		Self {
			state: Mutex::new(MemoryState {
				fallback_html: fallback_html.into(),
				..Default::default()
			}),
		}
	}

	pub fn status_html(&self) -> String {
		self.state.lock().status_html.clone()
	}

	pub fn fragments(&self) -> Vec<Fragment> {
		self.state.lock().fragments.clone()
	}

	pub fn fragment_count(&self) -> usize {
		self.state.lock().fragments.len()
	}

	pub fn fallback_html(&self) -> String {
		self.state.lock().fallback_html.clone()
	}

	pub fn is_fallback_visible(&self) -> bool {
		!self.state.lock().fallback_html.is_empty()
	}

	pub fn is_load_more_visible(&self) -> bool {
		self.state.lock().load_more_visible
	}
}

impl PresentationTargets for MemoryTargets {
	fn clear(&self, region: Region) {
		let mut state = self.state.lock();
		match region {
			Region::Status => state.status_html.clear(),
			Region::Results => state.fragments.clear(),
			Region::Fallback => state.fallback_html.clear(),
		}
	}

	fn set_status_html(&self, html: &str) {
		self.state.lock().status_html = html.to_string();
	}

	fn append_fragment(&self, fragment: &Fragment) {
		self.state.lock().fragments.push(fragment.clone());
	}

	fn set_load_more_visible(&self, visible: bool) {
		self.state.lock().load_more_visible = visible;
	}

	fn fallback_snapshot(&self) -> String {
		self.fallback_html()
	}

	fn restore_fallback(&self, snapshot: &str) {
		self.state.lock().fallback_html = snapshot.to_string();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn fragment(url: &str) -> Fragment {
		Fragment {
			url: url.to_string(),
			html: format!("<a href=\"{url}\"></a>"),
		}
	}

	#[test]
	fn test_clear_regions_independently() {
		let targets = MemoryTargets::new("<ul>explorer</ul>");
		targets.set_status_html("<h2>hi</h2>");
		targets.append_fragment(&fragment("/a/"));

		targets.clear(Region::Results);
		assert_eq!(targets.fragment_count(), 0);
		assert_eq!(targets.status_html(), "<h2>hi</h2>");
		assert!(targets.is_fallback_visible());

		targets.clear(Region::Fallback);
		assert!(!targets.is_fallback_visible());
		targets.clear(Region::Status);
		assert!(targets.status_html().is_empty());
	}

	#[test]
	fn test_snapshot_restores_verbatim() {
		let targets = MemoryTargets::new("<nav>tree</nav>");
		let snapshot = targets.fallback_snapshot();
		targets.clear(Region::Fallback);
		targets.restore_fallback(&snapshot);
		assert_eq!(targets.fallback_html(), "<nav>tree</nav>");
	}

	#[test]
	fn test_fragments_keep_append_order() {
		let targets = MemoryTargets::default();
		targets.append_fragment(&fragment("/1/"));
		targets.append_fragment(&fragment("/2/"));
		let urls: Vec<String> = targets.fragments().into_iter().map(|f| f.url).collect();
		assert_eq!(urls, vec!["/1/", "/2/"]);
	}
}
