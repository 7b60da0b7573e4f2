// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Presentation targets that echo page updates to the terminal.

use quire_search::{Fragment, MemoryTargets, PresentationTargets, Region};

/// Keeps page state in memory and prints each change as it happens.
#[derive(Debug, Default)]
pub struct ConsoleTargets {
	page: MemoryTargets,
}

impl ConsoleTargets {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn page(&self) -> &MemoryTargets {
		&self.page
	}
}

impl PresentationTargets for ConsoleTargets {
	fn clear(&self, region: Region) {
		self.page.clear(region);
	}

	fn set_status_html(&self, html: &str) {
		self.page.set_status_html(html);
		if !html.is_empty() {
			println!("{html}");
		}
	}

	fn append_fragment(&self, fragment: &Fragment) {
		self.page.append_fragment(fragment);
		println!("  {}", fragment.url);
	}

	fn set_load_more_visible(&self, visible: bool) {
		if visible && !self.page.is_load_more_visible() {
			println!("  (:more for the next page)");
		}
		self.page.set_load_more_visible(visible);
	}

	fn fallback_snapshot(&self) -> String {
		self.page.fallback_snapshot()
	}

	fn restore_fallback(&self, snapshot: &str) {
		self.page.restore_fallback(snapshot);
	}
}
