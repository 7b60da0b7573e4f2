// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Per-query result set and reveal cursor.

use std::ops::Range;
use std::sync::Arc;

use quire_search_core::ResultHandle;

/// Result set and reveal cursor for one live query.
#[derive(Debug)]
pub struct SearchSession {
	generation: u64,
	query: String,
	handles: Vec<Arc<dyn ResultHandle>>,
	revealed: usize,
	// Serializes "load more" requests on this session only.
	reveal_lock: Arc<tokio::sync::Mutex<()>>,
}

impl SearchSession {
	pub fn new(
		generation: u64,
		query: impl Into<String>,
		handles: Vec<Arc<dyn ResultHandle>>,
	) -> Self {
		Self {
			generation,
			query: query.into(),
			handles,
			revealed: 0,
			reveal_lock: Arc::new(tokio::sync::Mutex::new(())),
		}
	}

	pub fn generation(&self) -> u64 {
		self.generation
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn total(&self) -> usize {
		self.handles.len()
	}

	pub fn revealed(&self) -> usize {
		self.revealed
	}

	pub fn is_exhausted(&self) -> bool {
		self.revealed >= self.handles.len()
	}

	/// Indices of the next batch of not-yet-revealed handles.
	pub fn next_window(&self, batch_size: usize) -> Range<usize> {
		let end = self.revealed.saturating_add(batch_size).min(self.handles.len());
		self.revealed..end
	}

	pub fn handles(&self, window: Range<usize>) -> Vec<Arc<dyn ResultHandle>> {
		self.handles[window].to_vec()
	}

	/// Moves the cursor forward. The cursor never moves backwards or past the end.
	pub fn advance_to(&mut self, next: usize) {
		self.revealed = next.clamp(self.revealed, self.handles.len());
	}

	pub(crate) fn reveal_lock(&self) -> Arc<tokio::sync::Mutex<()>> {
		Arc::clone(&self.reveal_lock)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use proptest::prelude::*;
	use quire_search_core::{IndexResult, ResultData, ResultMeta};

	#[derive(Debug)]
	struct Stub(usize);

	#[async_trait]
	impl ResultHandle for Stub {
		fn id(&self) -> &str {
			"stub"
		}

		async fn data(&self) -> IndexResult<ResultData> {
			Ok(ResultData {
				url: format!("/{}/", self.0),
				meta: ResultMeta::default(),
			})
		}
	}

	fn session(n: usize) -> SearchSession {
		let handles = (0..n)
			.map(|i| Arc::new(Stub(i)) as Arc<dyn ResultHandle>)
			.collect();
		SearchSession::new(1, "rust", handles)
	}

	#[test]
	fn test_windows_walk_through_results() {
		let mut s = session(23);
		assert_eq!(s.next_window(10), 0..10);
		s.advance_to(10);
		assert_eq!(s.next_window(10), 10..20);
		s.advance_to(20);
		assert_eq!(s.next_window(10), 20..23);
		s.advance_to(23);
		assert!(s.is_exhausted());
		assert!(s.next_window(10).is_empty());
	}

	#[test]
	fn test_cursor_never_moves_backwards() {
		let mut s = session(5);
		s.advance_to(4);
		s.advance_to(2);
		assert_eq!(s.revealed(), 4);
		s.advance_to(99);
		assert_eq!(s.revealed(), 5);
	}

	#[test]
	fn test_empty_session_is_exhausted() {
		let s = session(0);
		assert!(s.is_exhausted());
		assert_eq!(s.next_window(10), 0..0);
	}

	proptest! {
		#[test]
		fn prop_cursor_bounded_and_monotonic(
			total in 0usize..200,
			steps in proptest::collection::vec(0usize..300, 0..20),
		) {
			let mut s = session(total);
			let mut last = 0;
			for step in steps {
				s.advance_to(step);
				prop_assert!(s.revealed() >= last);
				prop_assert!(s.revealed() <= total);
				last = s.revealed();
			}
		}
	}
}
