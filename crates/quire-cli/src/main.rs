// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Quire CLI - drive the site search controller from a terminal
//!
//! Loads a JSON fixture index and runs queries through the same controller,
//! debouncer and renderer a page would use.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quire_chrome::{scroll_progress, FilePreferenceStore, NavbarScroll, ThemeToggle};
use quire_config::{load_config, LogFormat, LoggingConfig, QuireConfig};
use quire_search::{ControllerConfig, MemoryTargets, Renderer, SearchController};

mod console;
mod fixture;
mod repl;

use console::ConsoleTargets;
use fixture::FixtureIndex;
use repl::Repl;

/// Quire - incremental site search
#[derive(Parser, Debug)]
#[command(name = "quire", version, about, long_about = None)]
struct Args {
	/// Path to custom configuration file
	#[arg(short, long, global = true)]
	config: Option<PathBuf>,

	/// Log level (overrides config)
	#[arg(short, long, global = true)]
	log_level: Option<String>,

	/// Output logs as JSON (overrides config)
	#[arg(long, global = true)]
	json_logs: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Run one query and print the revealed result cards
	Search {
		/// JSON index file
		#[arg(long)]
		index: PathBuf,

		query: String,

		/// Number of batches to reveal
		#[arg(long, default_value_t = 1)]
		pages: usize,
	},

	/// Read search box contents line by line (:more, :esc, :quit)
	Repl {
		/// JSON index file
		#[arg(long)]
		index: PathBuf,
	},

	/// Show or toggle the saved colour theme
	Theme {
		#[command(subcommand)]
		action: Option<ThemeAction>,
	},

	/// Replay scroll offsets through the navbar and progress bar
	Scroll {
		/// Document height in pixels
		#[arg(long, default_value_t = 4000.0)]
		height: f64,

		/// Viewport height in pixels
		#[arg(long, default_value_t = 800.0)]
		viewport: f64,

		/// Successive scroll offsets
		#[arg(required = true, allow_negative_numbers = true)]
		offsets: Vec<f64>,
	},
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum ThemeAction {
	Show,
	Toggle,
}

fn init_tracing(logging: &LoggingConfig) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		EnvFilter::new(format!(
			"quire={0},quire_search={0},quire_config={0},quire_chrome={0}",
			logging.level
		))
	});

	match logging.format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Compact => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().compact().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Pretty => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_writer(std::io::stderr))
				.init();
		}
	}
}

/// Folds command-line overrides into the loaded logging section.
fn apply_logging_overrides(logging: &mut LoggingConfig, args: &Args) {
	if let Some(level) = &args.log_level {
		logging.level = level.clone();
	}
	if args.json_logs {
		logging.format = LogFormat::Json;
	}
}

fn controller_config(config: &QuireConfig) -> ControllerConfig {
	ControllerConfig {
		min_query_len: config.search.min_query_len,
		batch_size: config.search.batch_size,
		sort: config.search.sort,
		lookup_timeout: config.search.lookup_timeout_ms.map(Duration::from_millis),
	}
}

fn renderer(config: &QuireConfig) -> Renderer {
	Renderer::new(quire_search::RenderConfig {
		placeholder_image: config.render.placeholder_image.clone(),
		default_image_alt: config.render.default_image_alt.clone(),
		badge_label: config.render.badge_label.clone(),
	})
}

#[instrument(skip(config))]
async fn run_search(
	config: &QuireConfig,
	index: PathBuf,
	query: String,
	pages: usize,
) -> Result<()> {
	let index = Arc::new(FixtureIndex::load(&index)?);
	if index.is_empty() {
		warn!("index contains no documents");
	}
	let targets = Arc::new(MemoryTargets::default());
	let controller = SearchController::new(
		index,
		targets.clone(),
		renderer(config),
		controller_config(config),
	);

	controller.dispatch(&query).await;
	for _ in 1..pages {
		if !targets.is_load_more_visible() {
			break;
		}
		controller.reveal_next_batch().await;
	}

	println!("{}", targets.status_html());
	for fragment in targets.fragments() {
		println!("{}", fragment.html);
	}
	debug!(state = ?controller.state(), "search finished");
	Ok(())
}

async fn run_repl(config: &QuireConfig, index: PathBuf) -> Result<()> {
	let index = Arc::new(FixtureIndex::load(&index)?);
	let targets = Arc::new(ConsoleTargets::new());
	let controller = Arc::new(SearchController::new(
		index,
		targets.clone(),
		renderer(config),
		controller_config(config),
	));
	let repl = Repl::new(controller, Duration::from_millis(config.search.debounce_ms));
	repl.run(BufReader::new(tokio::io::stdin())).await?;
	debug!(shown = targets.page().fragment_count(), "repl finished");
	Ok(())
}

fn run_theme(config: &QuireConfig, action: ThemeAction) -> Result<()> {
	let path = config
		.theme
		.store_path
		.clone()
		.context("no preference file location; set theme.store_path")?;
	let toggle = ThemeToggle::new(
		Arc::new(FilePreferenceStore::new(path)),
		config.theme.dark_value.clone(),
	);

	let theme = match action {
		ThemeAction::Show => toggle.current()?,
		ThemeAction::Toggle => toggle.toggle()?,
	};
	println!("{}", toggle.attribute_value(theme));
	Ok(())
}

fn run_scroll(config: &QuireConfig, height: f64, viewport: f64, offsets: &[f64]) {
	let mut navbar = NavbarScroll::new(config.navbar.offset_px);
	for &offset in offsets {
		if let Some(position) = navbar.on_scroll(offset) {
			println!(
				"{offset:>8.0}  #{} top={}  progress={:.1}%",
				config.navbar.element_id,
				position.css_top(),
				scroll_progress(offset, height, viewport)
			);
		}
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	let mut config = load_config(args.config.clone()).context("failed to load configuration")?;
	apply_logging_overrides(&mut config.logging, &args);
	init_tracing(&config.logging);
	info!(command = ?args.command, "starting quire");

	match args.command {
		Command::Search {
			index,
			query,
			pages,
		} => run_search(&config, index, query, pages).await,
		Command::Repl { index } => run_repl(&config, index).await,
		Command::Theme { action } => run_theme(&config, action.unwrap_or(ThemeAction::Show)),
		Command::Scroll {
			height,
			viewport,
			offsets,
		} => {
			run_scroll(&config, height, viewport, &offsets);
			Ok(())
		}
	}
}
