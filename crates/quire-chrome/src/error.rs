// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use thiserror::Error;

pub type PreferenceResult<T> = std::result::Result<T, PreferenceError>;

#[derive(Debug, Error)]
pub enum PreferenceError {
	#[error("failed to access preference file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("corrupt preference file {path}: {source}")]
	Corrupt {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("failed to serialize preferences: {0}")]
	Serialize(#[from] serde_json::Error),
}
