// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: defaults, TOML files and environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::QuireConfigLayer;
use crate::sections::{
	LogFormat, LoggingConfigLayer, NavbarConfigLayer, RenderConfigLayer, SearchConfigLayer,
	ThemeConfigLayer,
};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<QuireConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<QuireConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(QuireConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file is not an error.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// `$XDG_CONFIG_HOME/quire/config.toml` (or the platform equivalent).
	pub fn user() -> Option<Self> {
		dirs::config_dir().map(|d| Self::new(d.join("quire").join("config.toml")))
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<QuireConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(QuireConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: QuireConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: QUIRE_<SECTION>_<FIELD>
pub struct EnvSource;

impl EnvSource {
	/// Builds a layer from an arbitrary variable lookup.
	pub fn load_with<F>(lookup: F) -> Result<QuireConfigLayer, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let env = EnvReader { lookup };
		Ok(QuireConfigLayer {
			search: Some(SearchConfigLayer {
				debounce_ms: env.parse("QUIRE_SEARCH_DEBOUNCE_MS")?,
				batch_size: env.parse("QUIRE_SEARCH_BATCH_SIZE")?,
				min_query_len: env.parse("QUIRE_SEARCH_MIN_QUERY_LEN")?,
				sort: env.parse("QUIRE_SEARCH_SORT")?,
				lookup_timeout_ms: env.parse("QUIRE_SEARCH_LOOKUP_TIMEOUT_MS")?,
			}),
			render: Some(RenderConfigLayer {
				placeholder_image: env.var("QUIRE_RENDER_PLACEHOLDER_IMAGE"),
				default_image_alt: env.var("QUIRE_RENDER_DEFAULT_IMAGE_ALT"),
				badge_label: env.var("QUIRE_RENDER_BADGE_LABEL"),
			}),
			navbar: Some(NavbarConfigLayer {
				element_id: env.var("QUIRE_NAVBAR_ELEMENT_ID"),
				offset_px: env.parse("QUIRE_NAVBAR_OFFSET_PX")?,
			}),
			theme: Some(ThemeConfigLayer {
				dark_value: env.var("QUIRE_THEME_DARK_VALUE"),
				store_path: env.var("QUIRE_THEME_STORE_PATH").map(PathBuf::from),
			}),
			logging: Some(LoggingConfigLayer {
				level: env.var("QUIRE_LOG_LEVEL"),
				format: env.parse::<LogFormat>("QUIRE_LOG_FORMAT")?,
			}),
		})
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<QuireConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Self::load_with(|name| std::env::var(name).ok())
	}
}

struct EnvReader<F> {
	lookup: F,
}

impl<F> EnvReader<F>
where
	F: Fn(&str) -> Option<String>,
{
	fn var(&self, name: &str) -> Option<String> {
		(self.lookup)(name).filter(|s| !s.is_empty())
	}

	fn parse<T>(&self, name: &str) -> Result<Option<T>, ConfigError>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		match self.var(name) {
			Some(v) => v.trim().parse().map(Some).map_err(|e| ConfigError::InvalidValue {
				key: name.to_string(),
				message: format!("invalid value '{v}': {e}"),
			}),
			None => Ok(None),
		}
	}
}
