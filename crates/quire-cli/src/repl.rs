// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Line-oriented stand-in for a search box.
//!
//! Each input line is treated as the box's new contents and goes through the
//! debouncer, so typing several lines quickly only searches for the last one.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use quire_search::{spawn_dispatcher, Debouncer, SearchController};

#[derive(Debug, PartialEq, Eq)]
pub enum ReplCommand {
	/// New search box contents.
	Input(String),
	/// Reveal the next batch.
	More,
	/// Clear the search box immediately.
	Escape,
	Quit,
}

impl ReplCommand {
	pub fn parse(line: &str) -> Self {
		match line.trim_end_matches(['\r', '\n']) {
			":more" => ReplCommand::More,
			":esc" => ReplCommand::Escape,
			":quit" | ":q" => ReplCommand::Quit,
			other => ReplCommand::Input(other.to_string()),
		}
	}
}

pub struct Repl {
	controller: Arc<SearchController>,
	debouncer: Debouncer,
	dispatcher: tokio::task::JoinHandle<()>,
}

impl Repl {
	pub fn new(controller: Arc<SearchController>, delay: Duration) -> Self {
		let (debouncer, queries) = Debouncer::new(delay);
		let dispatcher = spawn_dispatcher(Arc::clone(&controller), queries);
		Self {
			controller,
			debouncer,
			dispatcher,
		}
	}

	/// Applies one command. Returns `false` once the session should end.
	pub async fn handle(&self, command: ReplCommand) -> bool {
		match command {
			ReplCommand::Input(value) => self.debouncer.notify(&value),
			ReplCommand::More => self.controller.reveal_next_batch().await,
			ReplCommand::Escape => self.debouncer.flush(""),
			ReplCommand::Quit => return false,
		}
		true
	}

	pub async fn run<R>(self, input: R) -> Result<()>
	where
		R: AsyncBufRead + Unpin,
	{
		info!(delay_ms = self.debouncer.delay().as_millis() as u64, "repl started");
		let mut lines = input.lines();
		while let Some(line) = lines.next_line().await.context("failed to read input")? {
			if !self.handle(ReplCommand::parse(&line)).await {
				break;
			}
		}
		debug!("repl input finished");
		self.dispatcher.abort();
		Ok(())
	}
}
