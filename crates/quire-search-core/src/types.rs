// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Query options and result data types.

use serde::{Deserialize, Serialize};

/// Sort direction for the index's date sort key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	#[default]
	Asc,
	Desc,
}

impl SortDirection {
	pub fn as_str(&self) -> &'static str {
		match self {
			SortDirection::Asc => "asc",
			SortDirection::Desc => "desc",
		}
	}
}

impl std::str::FromStr for SortDirection {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"asc" => Ok(SortDirection::Asc),
			"desc" => Ok(SortDirection::Desc),
			other => Err(format!("unknown sort direction '{other}'")),
		}
	}
}

/// Sort keys understood by the index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOptions {
	pub date: SortDirection,
}

/// Options passed along with every query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
	pub sort: SortOptions,
}

impl SearchOptions {
	pub fn sorted_by_date(direction: SortDirection) -> Self {
		Self {
			sort: SortOptions { date: direction },
		}
	}
}

/// Metadata attached to an indexed page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMeta {
	pub title: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image_alt: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub date: Option<String>,
}

/// Resolved data for one result, in the shape the index emits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultData {
	pub url: String,
	pub meta: ResultMeta,
}

/// Flattened result handed to the renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultRecord {
	pub url: String,
	pub title: String,
	pub image: Option<String>,
	pub image_alt: Option<String>,
	pub date: Option<String>,
}

impl ResultRecord {
	pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			title: title.into(),
			..Default::default()
		}
	}

	pub fn with_image(mut self, image: impl Into<String>) -> Self {
		self.image = Some(image.into());
		self
	}

	pub fn with_image_alt(mut self, alt: impl Into<String>) -> Self {
		self.image_alt = Some(alt.into());
		self
	}

	pub fn with_date(mut self, date: impl Into<String>) -> Self {
		self.date = Some(date.into());
		self
	}
}

impl From<ResultData> for ResultRecord {
	fn from(data: ResultData) -> Self {
		// Empty strings from the indexer mean "not set".
		let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
		Self {
			url: data.url,
			title: data.meta.title,
			image: non_empty(data.meta.image),
			image_alt: non_empty(data.meta.image_alt),
			date: non_empty(data.meta.date),
		}
	}
}
