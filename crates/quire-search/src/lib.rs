// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Incremental search-results controller for Quire documentation sites.
//!
//! Input flows keystroke → [`Debouncer`] → [`SearchController`] → index
//! lookup → [`Renderer`] → [`PresentationTargets`]. Results are revealed in
//! batches; every dispatch supersedes the previous one so late index
//! responses never reach the page.

pub mod controller;
pub mod debounce;
pub mod render;
pub mod session;
pub mod status;
pub mod targets;

pub use controller::{
	spawn_dispatcher, ControllerConfig, LookupTicket, SearchController, SearchState,
};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_DELAY};
pub use quire_search_core::{DEFAULT_BATCH_SIZE, DEFAULT_MIN_QUERY_LEN};
pub use render::{format_date, Fragment, RenderConfig, Renderer};
pub use session::SearchSession;
pub use status::{StatusMessage, GENERIC_ERROR_TEXT};
pub use targets::{MemoryTargets, PresentationTargets, Region};
