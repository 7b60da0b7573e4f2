// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Search session controller.
//!
//! The controller owns the "query → result set → revealed window" lifecycle.
//! Every dispatch mints a new generation; any asynchronous completion that
//! resumes with an older generation is dropped without touching the page.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use parking_lot::Mutex;
use quire_search_core::{
	IndexClient, IndexError, IndexResult, ResultRecord, SearchOptions, SearchResponse,
	SortDirection, DEFAULT_BATCH_SIZE, DEFAULT_MIN_QUERY_LEN,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use crate::render::Renderer;
use crate::session::SearchSession;
use crate::status::StatusMessage;
use crate::targets::{PresentationTargets, Region};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
	/// Queries shorter than this are inactive. Length is counted in Unicode
	/// scalar values after trimming, not UTF-16 units, so a lone emoji is one.
	pub min_query_len: usize,
	/// Results revealed per "load more".
	pub batch_size: usize,
	pub sort: SortDirection,
	/// Optional upper bound on a single index lookup.
	pub lookup_timeout: Option<Duration>,
}

impl Default for ControllerConfig {
	fn default() -> Self {
		Self {
			min_query_len: DEFAULT_MIN_QUERY_LEN,
			batch_size: DEFAULT_BATCH_SIZE,
			sort: SortDirection::Asc,
			lookup_timeout: None,
		}
	}
}

/// Observable controller state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchState {
	/// No active query; the fallback panel is shown.
	#[default]
	Idle,
	Searching {
		query: String,
	},
	Empty {
		query: String,
	},
	Populated {
		query: String,
		revealed: usize,
		total: usize,
	},
	Errored {
		query: String,
	},
}

/// A dispatched query waiting for its index lookup.
#[derive(Debug)]
pub struct LookupTicket {
	generation: u64,
	query: String,
}

impl LookupTicket {
	pub fn query(&self) -> &str {
		&self.query
	}
}

#[derive(Debug, Default)]
struct ControllerState {
	generation: u64,
	state: SearchState,
	session: Option<SearchSession>,
}

pub struct SearchController {
	index: Arc<dyn IndexClient>,
	targets: Arc<dyn PresentationTargets>,
	renderer: Renderer,
	config: ControllerConfig,
	fallback_snapshot: String,
	inner: Mutex<ControllerState>,
}

impl SearchController {
	/// Creates a controller and captures the fallback panel's current markup.
	pub fn new(
		index: Arc<dyn IndexClient>,
		targets: Arc<dyn PresentationTargets>,
		renderer: Renderer,
		config: ControllerConfig,
	) -> Self {
		let fallback_snapshot = targets.fallback_snapshot();
		Self {
			index,
			targets,
			renderer,
			config,
			fallback_snapshot,
			inner: Mutex::new(ControllerState::default()),
		}
	}

	pub fn state(&self) -> SearchState {
		self.inner.lock().state.clone()
	}

	/// Runs a full dispatch: the synchronous prefix, then the lookup.
	pub async fn dispatch(&self, raw: &str) {
		if let Some(ticket) = self.begin_dispatch(raw) {
			self.run_lookup(ticket).await;
		}
	}

	/// Synchronous part of a dispatch.
	///
	/// Invalidates whatever came before, resets the page and returns a ticket
	/// when a lookup must be issued. Inactive queries return `None` after
	/// restoring the fallback panel.
	pub fn begin_dispatch(&self, raw: &str) -> Option<LookupTicket> {
		let query = raw.trim();
		let mut inner = self.inner.lock();
		inner.generation += 1;
		inner.session = None;

		self.targets.clear(Region::Results);
		self.targets.clear(Region::Status);
		self.targets.set_load_more_visible(false);

		if query.chars().count() < self.config.min_query_len {
			debug!(generation = inner.generation, "inactive query, restoring fallback");
			inner.state = SearchState::Idle;
			self.targets.restore_fallback(&self.fallback_snapshot);
			return None;
		}

		self.targets.clear(Region::Fallback);
		self.set_status(&StatusMessage::Searching {
			query: query.to_string(),
		});
		inner.state = SearchState::Searching {
			query: query.to_string(),
		};

		Some(LookupTicket {
			generation: inner.generation,
			query: query.to_string(),
		})
	}

	/// Awaits the index lookup for a ticket and applies the outcome if the
	/// ticket is still current.
	#[instrument(skip(self, ticket), fields(query = %ticket.query, generation = ticket.generation))]
	pub async fn run_lookup(&self, ticket: LookupTicket) {
		let options = SearchOptions::sorted_by_date(self.config.sort);
		let outcome = self.lookup(&ticket.query, &options).await;

		{
			let mut inner = self.inner.lock();
			if inner.generation != ticket.generation {
				debug!(current = inner.generation, "discarding stale lookup");
				return;
			}

			match outcome {
				Err(e) => {
					error!(error = %e, "search lookup failed");
					self.set_status(&StatusMessage::Error);
					self.targets.set_load_more_visible(false);
					inner.state = SearchState::Errored {
						query: ticket.query,
					};
					return;
				}
				Ok(response) if response.is_empty() => {
					info!("no results");
					self.set_status(&StatusMessage::NoResults {
						query: ticket.query.clone(),
					});
					self.targets.restore_fallback(&self.fallback_snapshot);
					inner.state = SearchState::Empty {
						query: ticket.query,
					};
					return;
				}
				Ok(response) => {
					let total = response.len();
					info!(total, "lookup complete");
					self.set_status(&StatusMessage::Showing {
						shown: 0,
						total,
						query: ticket.query.clone(),
					});
					inner.state = SearchState::Populated {
						query: ticket.query.clone(),
						revealed: 0,
						total,
					};
					inner.session = Some(SearchSession::new(
						ticket.generation,
						ticket.query,
						response.results,
					));
				}
			}
		}

		self.reveal_batch(Some(ticket.generation)).await;
	}

	/// Reveals the next batch of the live session. A no-op without a live
	/// session or once every result has been shown.
	pub async fn reveal_next_batch(&self) {
		self.reveal_batch(None).await;
	}

	async fn lookup(&self, query: &str, options: &SearchOptions) -> IndexResult<SearchResponse> {
		match self.config.lookup_timeout {
			Some(limit) => tokio::time::timeout(limit, self.index.search(query, options))
				.await
				.map_err(|_| IndexError::Timeout(limit.as_millis() as u64))?,
			None => self.index.search(query, options).await,
		}
	}

	async fn reveal_batch(&self, expected_generation: Option<u64>) {
		let (generation, reveal_lock) = {
			let inner = self.inner.lock();
			match inner.session.as_ref() {
				Some(session)
					if expected_generation.map_or(true, |g| g == session.generation()) =>
				{
					(session.generation(), session.reveal_lock())
				}
				_ => {
					debug!("no live session to reveal");
					return;
				}
			}
		};

		let _guard = reveal_lock.lock().await;

		let (window, handles) = {
			let inner = self.inner.lock();
			let Some(session) = inner.session.as_ref().filter(|s| s.generation() == generation)
			else {
				debug!(generation, "session replaced before reveal");
				return;
			};
			if session.is_exhausted() {
				debug!(generation, "all results already revealed");
				return;
			}
			let window = session.next_window(self.config.batch_size);
			(window.clone(), session.handles(window))
		};

		debug!(generation, start = window.start, end = window.end, "resolving batch");
		let resolved = join_all(handles.iter().map(|handle| async move {
			(handle.id().to_string(), handle.data().await)
		}))
		.await;

		let mut inner = self.inner.lock();
		if inner.generation != generation {
			debug!(generation, current = inner.generation, "discarding stale batch");
			return;
		}
		let Some(session) = inner.session.as_mut() else {
			return;
		};

		for (id, result) in resolved {
			match result {
				Ok(data) => {
					let fragment = self.renderer.render(&ResultRecord::from(data));
					self.targets.append_fragment(&fragment);
				}
				Err(e) if e.is_per_result() => {
					warn!(result_id = %id, error = %e, "skipping unresolvable result");
				}
				Err(e) => {
					error!(
						result_id = %id,
						error = %e,
						"index failed while resolving result, skipping"
					);
				}
			}
		}

		session.advance_to(window.end);
		let revealed = session.revealed();
		let total = session.total();
		let query = session.query().to_string();

		self.set_status(&StatusMessage::Showing {
			shown: revealed,
			total,
			query: query.clone(),
		});
		self.targets.set_load_more_visible(revealed < total);
		inner.state = SearchState::Populated {
			query,
			revealed,
			total,
		};
	}

	fn set_status(&self, status: &StatusMessage) {
		self.targets.set_status_html(&status.to_html());
	}
}

/// Feeds debounced queries into the controller.
///
/// Each query's synchronous prefix runs in arrival order; lookups run as
/// separate tasks so a newer query never waits behind an older one.
pub fn spawn_dispatcher(
	controller: Arc<SearchController>,
	mut queries: mpsc::UnboundedReceiver<String>,
) -> JoinHandle<()> {
	tokio::spawn(async move {
		while let Some(query) = queries.recv().await {
			if let Some(ticket) = controller.begin_dispatch(&query) {
				debug!(query = ticket.query(), "spawning lookup");
				let controller = Arc::clone(&controller);
				tokio::spawn(async move {
					controller.run_lookup(ticket).await;
				});
			}
		}
		debug!("query channel closed, dispatcher exiting");
	})
}
