// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for index lookups and result resolution.

use thiserror::Error;

/// Result type alias for index operations.
pub type IndexResult<T> = std::result::Result<T, IndexError>;

/// Errors that can occur when talking to the search index.
#[derive(Clone, Debug, Error)]
pub enum IndexError {
	/// The query lookup failed.
	#[error("lookup failed: {0}")]
	Lookup(String),

	/// A single result handle could not be resolved.
	#[error("failed to resolve result {id}: {message}")]
	Resolution { id: String, message: String },

	/// The lookup did not complete in time.
	#[error("lookup timed out after {0} ms")]
	Timeout(u64),

	/// A hit resolved to data that cannot be rendered.
	#[error("invalid result data: {0}")]
	InvalidData(String),
}

impl IndexError {
	/// Returns true if the error concerns a single result rather than the whole lookup.
	pub fn is_per_result(&self) -> bool {
		matches!(
			self,
			IndexError::Resolution { .. } | IndexError::InvalidData(_)
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_resolution_is_per_result() {
		let err = IndexError::Resolution {
			id: "doc-1".to_string(),
			message: "fragment missing".to_string(),
		};
		assert!(err.is_per_result());
		assert_eq!(
			err.to_string(),
			"failed to resolve result doc-1: fragment missing"
		);
	}

	#[test]
	fn test_lookup_errors_are_not_per_result() {
		assert!(!IndexError::Lookup("boom".to_string()).is_per_result());
		assert!(!IndexError::Timeout(500).is_per_result());
		assert!(IndexError::InvalidData("no url".to_string()).is_per_result());
	}

	#[test]
	fn test_timeout_message() {
		assert_eq!(
			IndexError::Timeout(1500).to_string(),
			"lookup timed out after 1500 ms"
		);
	}
}
