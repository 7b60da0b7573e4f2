// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Status line shown above the results list.

use std::fmt;

use crate::render::escape_html;

pub const GENERIC_ERROR_TEXT: &str = "An error occurred. Please try again later.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusMessage {
	Searching { query: String },
	NoResults { query: String },
	Showing { shown: usize, total: usize, query: String },
	Error,
}

impl StatusMessage {
	pub fn to_html(&self) -> String {
		match self {
			StatusMessage::Searching { query } => {
				format!("<h2>Searching for {}...</h2>", highlighted(query))
			}
			StatusMessage::NoResults { query } => {
				format!("<h2>No results for {}</h2>", highlighted(query))
			}
			StatusMessage::Showing {
				shown,
				total,
				query,
			} => format!(
				"<h2>Showing {shown} of {total} results for {}</h2>",
				highlighted(query)
			),
			StatusMessage::Error => GENERIC_ERROR_TEXT.to_string(),
		}
	}
}

impl fmt::Display for StatusMessage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			StatusMessage::Searching { query } => write!(f, "Searching for \"{query}\"..."),
			StatusMessage::NoResults { query } => write!(f, "No results for \"{query}\""),
			StatusMessage::Showing {
				shown,
				total,
				query,
			} => write!(f, "Showing {shown} of {total} results for \"{query}\""),
			StatusMessage::Error => f.write_str(GENERIC_ERROR_TEXT),
		}
	}
}

fn highlighted(query: &str) -> String {
	format!(
		"\"<span class=\"text-secondary\">{}</span>\"",
		escape_html(query)
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_showing_html() {
		let status = StatusMessage::Showing {
			shown: 10,
			total: 23,
			query: "rust".to_string(),
		};
		assert_eq!(
			status.to_html(),
			"<h2>Showing 10 of 23 results for \"<span class=\"text-secondary\">rust</span>\"</h2>"
		);
		assert_eq!(status.to_string(), "Showing 10 of 23 results for \"rust\"");
	}

	#[test]
	fn test_no_results_text() {
		let status = StatusMessage::NoResults {
			query: "zz".to_string(),
		};
		assert_eq!(status.to_string(), "No results for \"zz\"");
		assert!(status.to_html().contains(">zz</span>"));
	}

	#[test]
	fn test_query_is_escaped_in_html() {
		let status = StatusMessage::Searching {
			query: "<b>".to_string(),
		};
		assert_eq!(
			status.to_html(),
			"<h2>Searching for \"<span class=\"text-secondary\">&lt;b&gt;</span>\"...</h2>"
		);
	}

	#[test]
	fn test_error_is_plain_text() {
		assert_eq!(StatusMessage::Error.to_html(), GENERIC_ERROR_TEXT);
	}
}
