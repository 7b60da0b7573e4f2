// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Hide-on-scroll navbar state.

pub const DEFAULT_NAVBAR_OFFSET: u32 = 64;

/// Where the navbar should sit after a scroll event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarPosition {
	Shown,
	/// Moved off-screen by this many pixels.
	Hidden(u32),
}

impl NavbarPosition {
	/// CSS `top` value for this position.
	pub fn css_top(&self) -> String {
		match self {
			NavbarPosition::Shown => "0".to_string(),
			NavbarPosition::Hidden(offset) => format!("-{offset}px"),
		}
	}
}

#[derive(Debug, Clone)]
pub struct NavbarScroll {
	offset: u32,
	last_scroll_top: f64,
	disabled: bool,
	position: NavbarPosition,
}

impl Default for NavbarScroll {
	fn default() -> Self {
		Self::new(DEFAULT_NAVBAR_OFFSET)
	}
}

impl NavbarScroll {
	pub fn new(offset: u32) -> Self {
		Self {
			offset,
			last_scroll_top: 0.0,
			disabled: false,
			position: NavbarPosition::Shown,
		}
	}

	pub fn position(&self) -> NavbarPosition {
		self.position
	}

	pub fn is_enabled(&self) -> bool {
		!self.disabled
	}

	/// Handles a scroll event. Returns `None` while disabled.
	pub fn on_scroll(&mut self, scroll_top: f64) -> Option<NavbarPosition> {
		if self.disabled {
			return None;
		}
		self.position = if scroll_top > self.last_scroll_top {
			NavbarPosition::Hidden(self.offset)
		} else {
			NavbarPosition::Shown
		};
		self.last_scroll_top = scroll_top.max(0.0);
		Some(self.position)
	}

	pub fn enable(&mut self) {
		self.disabled = false;
	}

	/// Stops reacting to scroll and pins the navbar in place.
	pub fn disable(&mut self) -> NavbarPosition {
		self.disabled = true;
		self.position = NavbarPosition::Shown;
		self.position
	}

	/// Re-attaches after the page content was swapped.
	pub fn rebind(&mut self, scroll_top: f64) {
		tracing::trace!(scroll_top, "navbar rebound");
		self.last_scroll_top = scroll_top.max(0.0);
	}
}
