// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Page chrome for Quire documentation sites.
//!
//! These components are independent of search: a navbar that hides while
//! scrolling down, a reading-progress percentage and a persisted light/dark
//! theme preference.

pub mod error;
pub mod navbar;
pub mod progress;
pub mod theme;

pub use error::{PreferenceError, PreferenceResult};
pub use navbar::{NavbarPosition, NavbarScroll, DEFAULT_NAVBAR_OFFSET};
pub use progress::scroll_progress;
pub use theme::{
	FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, Theme, ThemeToggle, THEME_KEY,
};
