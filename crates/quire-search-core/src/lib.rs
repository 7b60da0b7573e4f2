// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Core types for Quire site search.
//!
//! This crate defines the boundary between the search controller and the
//! precomputed site index:
//!
//! - [`IndexClient`]: runs a query and returns ranked [`ResultHandle`]s
//! - [`ResultHandle`]: lazily resolves one hit into [`ResultData`]
//! - [`ResultRecord`]: the flattened record handed to the renderer

pub mod defaults;
pub mod error;
pub mod index;
pub mod types;

pub use defaults::{
	DEFAULT_BADGE_LABEL, DEFAULT_BATCH_SIZE, DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_QUERY_LEN,
	DEFAULT_PLACEHOLDER_IMAGE,
};
pub use error::{IndexError, IndexResult};
pub use index::{IndexClient, ResultHandle, SearchResponse};
pub use types::{ResultData, ResultMeta, ResultRecord, SearchOptions, SortDirection, SortOptions};
