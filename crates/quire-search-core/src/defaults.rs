// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Default tuning shared by the controller, debouncer and configuration.

/// Quiet period after the last keystroke before a query is dispatched.
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

/// Results revealed per "load more".
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Trimmed queries shorter than this are inactive.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";
pub const DEFAULT_BADGE_LABEL: &str = "Tech";
