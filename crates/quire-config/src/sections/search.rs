// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Search controller configuration section.

pub use quire_search_core::{DEFAULT_BATCH_SIZE, DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_QUERY_LEN};

use quire_search_core::SortDirection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchConfigLayer {
	pub debounce_ms: Option<u64>,
	pub batch_size: Option<usize>,
	pub min_query_len: Option<usize>,
	pub sort: Option<SortDirection>,
	pub lookup_timeout_ms: Option<u64>,
}

impl SearchConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.debounce_ms.is_some() {
			self.debounce_ms = other.debounce_ms;
		}
		if other.batch_size.is_some() {
			self.batch_size = other.batch_size;
		}
		if other.min_query_len.is_some() {
			self.min_query_len = other.min_query_len;
		}
		if other.sort.is_some() {
			self.sort = other.sort;
		}
		if other.lookup_timeout_ms.is_some() {
			self.lookup_timeout_ms = other.lookup_timeout_ms;
		}
	}

	pub fn finalize(self) -> SearchConfig {
		SearchConfig {
			debounce_ms: self.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS),
			batch_size: self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE),
			min_query_len: self.min_query_len.unwrap_or(DEFAULT_MIN_QUERY_LEN),
			sort: self.sort.unwrap_or_default(),
			// 0 means "no timeout"
			lookup_timeout_ms: self.lookup_timeout_ms.filter(|ms| *ms > 0),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
	pub debounce_ms: u64,
	pub batch_size: usize,
	pub min_query_len: usize,
	pub sort: SortDirection,
	pub lookup_timeout_ms: Option<u64>,
}

impl Default for SearchConfig {
	fn default() -> Self {
		SearchConfigLayer::default().finalize()
	}
}
