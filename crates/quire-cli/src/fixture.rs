// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! JSON-file backed index used by the command line.

use std::cmp::Ordering;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use quire_search_core::{
	IndexClient, IndexError, IndexResult, ResultData, ResultHandle, ResultMeta, SearchOptions,
	SearchResponse, SortDirection,
};

/// One page in the fixture file.
#[derive(Clone, Debug, Deserialize)]
pub struct FixtureDocument {
	pub url: String,
	pub meta: ResultMeta,
	#[serde(default)]
	pub content: String,
}

impl FixtureDocument {
	/// Every whitespace-separated term must appear in the title or body.
	fn matches(&self, terms: &[String]) -> bool {
		let haystack = format!("{} {}", self.meta.title, self.content).to_lowercase();
		terms.iter().all(|term| haystack.contains(term.as_str()))
	}
}

#[derive(Debug)]
struct FixtureHandle {
	id: String,
	data: ResultData,
}

#[async_trait]
impl ResultHandle for FixtureHandle {
	fn id(&self) -> &str {
		&self.id
	}

	async fn data(&self) -> IndexResult<ResultData> {
		if self.data.url.trim().is_empty() {
			return Err(IndexError::InvalidData(format!(
				"document '{}' has no url",
				self.data.meta.title
			)));
		}
		Ok(self.data.clone())
	}
}

#[derive(Debug, Default)]
pub struct FixtureIndex {
	documents: Vec<FixtureDocument>,
}

impl FixtureIndex {
	pub fn new(documents: Vec<FixtureDocument>) -> Self {
		Self { documents }
	}

	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("failed to read index file {}", path.display()))?;
		let documents: Vec<FixtureDocument> = serde_json::from_str(&content)
			.with_context(|| format!("failed to parse index file {}", path.display()))?;
		let index = Self::new(documents);
		info!(path = %path.display(), documents = index.len(), "loaded fixture index");
		Ok(index)
	}

	pub fn len(&self) -> usize {
		self.documents.len()
	}

	pub fn is_empty(&self) -> bool {
		self.documents.is_empty()
	}
}

/// Undated pages sort after dated ones in either direction.
fn compare_dates(a: Option<&str>, b: Option<&str>, direction: SortDirection) -> Ordering {
	match (a, b) {
		(Some(a), Some(b)) => match direction {
			SortDirection::Asc => a.cmp(b),
			SortDirection::Desc => b.cmp(a),
		},
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	}
}

#[async_trait]
impl IndexClient for FixtureIndex {
	async fn search(&self, query: &str, options: &SearchOptions) -> IndexResult<SearchResponse> {
		let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();

		let mut hits: Vec<&FixtureDocument> =
			self.documents.iter().filter(|doc| doc.matches(&terms)).collect();
		hits.sort_by(|a, b| {
			compare_dates(
				a.meta.date.as_deref().filter(|d| !d.is_empty()),
				b.meta.date.as_deref().filter(|d| !d.is_empty()),
				options.sort.date,
			)
		});
		debug!(
			query,
			sort = options.sort.date.as_str(),
			hits = hits.len(),
			"fixture search"
		);

		let results = hits
			.into_iter()
			.map(|doc| {
				Arc::new(FixtureHandle {
					id: doc.url.clone(),
					data: ResultData {
						url: doc.url.clone(),
						meta: doc.meta.clone(),
					},
				}) as Arc<dyn ResultHandle>
			})
			.collect();
		Ok(SearchResponse::new(results))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	fn doc(url: &str, title: &str, date: Option<&str>) -> FixtureDocument {
		FixtureDocument {
			url: url.to_string(),
			meta: ResultMeta {
				title: title.to_string(),
				date: date.map(str::to_string),
				..Default::default()
			},
			content: String::new(),
		}
	}

	async fn urls(index: &FixtureIndex, query: &str, sort: SortDirection) -> Vec<String> {
		let response = index
			.search(query, &SearchOptions::sorted_by_date(sort))
			.await
			.unwrap();
		let mut urls = Vec::new();
		for handle in response.results {
			urls.push(handle.data().await.unwrap().url);
		}
		urls
	}

	#[tokio::test]
	async fn test_matching_is_case_insensitive_and_all_terms() {
		let index = FixtureIndex::new(vec![
			doc("/a", "Rust Ownership", None),
			doc("/b", "Async rust", None),
			doc("/c", "CSS Grid", None),
		]);

		assert_eq!(urls(&index, "RUST", SortDirection::Asc).await.len(), 2);
		assert_eq!(urls(&index, "async rust", SortDirection::Asc).await, vec!["/b"]);
		assert!(urls(&index, "python", SortDirection::Asc).await.is_empty());
	}

	#[tokio::test]
	async fn test_sorts_by_date_with_undated_last() {
		let index = FixtureIndex::new(vec![
			doc("/undated", "rust", None),
			doc("/new", "rust", Some("2024-05-01")),
			doc("/old", "rust", Some("2021-01-01")),
		]);

		assert_eq!(
			urls(&index, "rust", SortDirection::Asc).await,
			vec!["/old", "/new", "/undated"]
		);
		assert_eq!(
			urls(&index, "rust", SortDirection::Desc).await,
			vec!["/new", "/old", "/undated"]
		);
	}

	#[tokio::test]
	async fn test_document_without_url_fails_to_resolve() {
		let index = FixtureIndex::new(vec![doc("", "rust orphan", None)]);
		let response = index.search("rust", &SearchOptions::default()).await.unwrap();
		let err = response.results[0].data().await.unwrap_err();
		assert!(err.is_per_result());
		assert!(matches!(err, IndexError::InvalidData(_)));
	}

	#[test]
	fn test_load_reads_json_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(
			file,
			r#"[{{"url": "/x", "meta": {{"title": "X"}}, "content": "body"}}]"#
		)
		.unwrap();

		let index = FixtureIndex::load(file.path()).unwrap();
		assert_eq!(index.len(), 1);
	}

	#[test]
	fn test_load_rejects_malformed_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "{{").unwrap();
		assert!(FixtureIndex::load(file.path()).is_err());
	}

	#[test]
	fn test_bundled_fixture_parses() {
		let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site-index.json");
		let index = FixtureIndex::load(&path).unwrap();
		assert!(!index.is_empty());
	}
}
