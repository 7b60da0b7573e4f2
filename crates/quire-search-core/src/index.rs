// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Index client abstraction.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::IndexResult;
use crate::types::{ResultData, SearchOptions};

/// A lightweight, unresolved reference to one search hit.
#[async_trait]
pub trait ResultHandle: Send + Sync + fmt::Debug {
	/// Stable identifier of the hit, used for logging.
	fn id(&self) -> &str;

	/// Loads the full result data for this hit.
	async fn data(&self) -> IndexResult<ResultData>;
}

/// Ranked handles returned for one query. Order is the index's rank order.
#[derive(Clone, Debug, Default)]
pub struct SearchResponse {
	pub results: Vec<Arc<dyn ResultHandle>>,
}

impl SearchResponse {
	pub fn new(results: Vec<Arc<dyn ResultHandle>>) -> Self {
		Self { results }
	}

	pub fn len(&self) -> usize {
		self.results.len()
	}

	pub fn is_empty(&self) -> bool {
		self.results.is_empty()
	}
}

/// Client for a precomputed site search index.
#[async_trait]
pub trait IndexClient: Send + Sync {
	async fn search(&self, query: &str, options: &SearchOptions) -> IndexResult<SearchResponse>;
}
