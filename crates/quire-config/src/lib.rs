// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration for Quire site enhancements.
//!
//! Configuration is layered from multiple sources:
//! - Built-in defaults
//! - TOML file (`~/.config/quire/config.toml` or an explicit path)
//! - Environment variables (`QUIRE_*`)
//!
//! # Usage
//!
//! ```ignore
//! use quire_config::load_config;
//!
//! let config = load_config(None)?;
//! println!("batch size: {}", config.search.batch_size);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::QuireConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use std::path::PathBuf;

use tracing::debug;

/// Fully resolved configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuireConfig {
	pub search: SearchConfig,
	pub render: RenderConfig,
	pub navbar: NavbarConfig,
	pub theme: ThemeConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`QUIRE_*`)
/// 2. Config file (`config_path`, or the per-user default)
/// 3. Built-in defaults
pub fn load_config(config_path: Option<PathBuf>) -> Result<QuireConfig, ConfigError> {
	let mut sources: Vec<Box<dyn ConfigSource>> = vec![Box::new(DefaultsSource)];
	match config_path {
		Some(path) => sources.push(Box::new(TomlSource::new(path))),
		None => {
			if let Some(user) = TomlSource::user() {
				sources.push(Box::new(user));
			}
		}
	}
	sources.push(Box::new(EnvSource));

	load_from_sources(sources)
}

/// Merge the given sources in precedence order and finalize.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<QuireConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = QuireConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
pub fn finalize(layer: QuireConfigLayer) -> Result<QuireConfig, ConfigError> {
	let config = QuireConfig {
		search: layer.search.unwrap_or_default().finalize(),
		render: layer.render.unwrap_or_default().finalize(),
		navbar: layer.navbar.unwrap_or_default().finalize(),
		theme: layer.theme.unwrap_or_default().finalize(),
		logging: layer.logging.unwrap_or_default().finalize(),
	};

	validate(&config)?;
	Ok(config)
}

fn validate(config: &QuireConfig) -> Result<(), ConfigError> {
	if config.search.batch_size == 0 {
		return Err(ConfigError::Validation(
			"search.batch_size must be at least 1".to_string(),
		));
	}
	if config.search.min_query_len == 0 {
		return Err(ConfigError::Validation(
			"search.min_query_len must be at least 1".to_string(),
		));
	}
	if config.theme.dark_value.trim().is_empty() {
		return Err(ConfigError::Validation(
			"theme.dark_value must not be empty".to_string(),
		));
	}
	Ok(())
}
