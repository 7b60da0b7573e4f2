// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Keystroke debouncing for the search box.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use quire_search_core::DEFAULT_DEBOUNCE_MS;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(DEFAULT_DEBOUNCE_MS);

#[derive(Debug, Default)]
struct Pending {
	// Bumped on every notify/flush/cancel; a timer only fires for its own generation.
	generation: u64,
	value: Option<String>,
	timer: Option<JoinHandle<()>>,
}

impl Pending {
	fn disarm(&mut self) {
		self.generation += 1;
		self.value = None;
		if let Some(timer) = self.timer.take() {
			timer.abort();
		}
	}
}

/// Coalesces rapid input into a single dispatched query.
///
/// Dispatched (trimmed) values are delivered on the receiver returned by
/// [`Debouncer::new`]. Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
	delay: Duration,
	tx: mpsc::UnboundedSender<String>,
	pending: Arc<Mutex<Pending>>,
}

impl Debouncer {
	pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
		let (tx, rx) = mpsc::unbounded_channel();
		let debouncer = Self {
			delay,
			tx,
			pending: Arc::new(Mutex::new(Pending::default())),
		};
		(debouncer, rx)
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Records the latest input and restarts the quiet-period timer.
	pub fn notify(&self, raw: &str) {
		let mut pending = self.pending.lock();
		pending.disarm();
		pending.value = Some(raw.to_string());
		let generation = pending.generation;
		trace!(generation, "debounce timer armed");

		let shared = Arc::clone(&self.pending);
		let tx = self.tx.clone();
		let delay = self.delay;
		pending.timer = Some(tokio::spawn(async move {
			tokio::time::sleep(delay).await;

			let mut pending = shared.lock();
			if pending.generation != generation {
				return;
			}
			pending.timer = None;
			if let Some(value) = pending.value.take() {
				send(&tx, value.trim());
			}
		}));
	}

	/// Dispatches `value` immediately, dropping any pending input.
	pub fn flush(&self, value: &str) {
		let mut pending = self.pending.lock();
		pending.disarm();
		send(&self.tx, value.trim());
	}

	/// Drops any pending input without dispatching it.
	pub fn cancel(&self) {
		self.pending.lock().disarm();
	}

	pub fn has_pending(&self) -> bool {
		self.pending.lock().value.is_some()
	}
}

impl Drop for Debouncer {
	fn drop(&mut self) {
		self.pending.lock().disarm();
	}
}

fn send(tx: &mpsc::UnboundedSender<String>, query: &str) {
	if tx.send(query.to_string()).is_err() {
		debug!("query receiver dropped, discarding dispatch");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn drain(rx: &mut mpsc::UnboundedReceiver<String>) -> Vec<String> {
		let mut out = Vec::new();
		while let Ok(v) = rx.try_recv() {
			out.push(v);
		}
		out
	}

	#[test]
	fn test_default_delay_matches_shared_default() {
		assert_eq!(
			DEFAULT_DEBOUNCE_DELAY,
			Duration::from_millis(DEFAULT_DEBOUNCE_MS)
		);
	}

	#[tokio::test(start_paused = true)]
	async fn test_single_notify_dispatches_after_delay() {
		let (debouncer, mut rx) = Debouncer::new(DEFAULT_DEBOUNCE_DELAY);
		debouncer.notify("rust");

		tokio::time::sleep(Duration::from_millis(200)).await;
		assert!(drain(&mut rx).is_empty());
		assert!(debouncer.has_pending());

		tokio::time::sleep(Duration::from_millis(100)).await;
		assert_eq!(drain(&mut rx), vec!["rust"]);
		assert!(!debouncer.has_pending());
	}

	#[tokio::test(start_paused = true)]
	async fn test_rapid_notifies_coalesce_to_last_value() {
		let (debouncer, mut rx) = Debouncer::new(DEFAULT_DEBOUNCE_DELAY);
		for value in ["r", "ru", "rus", "rust", "rust "] {
			debouncer.notify(value);
			tokio::time::sleep(Duration::from_millis(100)).await;
		}
		assert!(drain(&mut rx).is_empty());

		tokio::time::sleep(Duration::from_millis(300)).await;
		assert_eq!(drain(&mut rx), vec!["rust"]);

		tokio::time::sleep(Duration::from_secs(5)).await;
		assert!(drain(&mut rx).is_empty());
	}

	#[tokio::test(start_paused = true)]
	async fn test_separate_quiet_windows_dispatch_separately() {
		let (debouncer, mut rx) = Debouncer::new(DEFAULT_DEBOUNCE_DELAY);
		debouncer.notify("tokio");
		tokio::time::sleep(Duration::from_millis(300)).await;
		debouncer.notify("serde");
		tokio::time::sleep(Duration::from_millis(300)).await;

		assert_eq!(drain(&mut rx), vec!["tokio", "serde"]);
	}

	#[tokio::test(start_paused = true)]
	async fn test_flush_bypasses_timer_and_cancels_pending() {
		let (debouncer, mut rx) = Debouncer::new(DEFAULT_DEBOUNCE_DELAY);
		debouncer.notify("rust");
		tokio::time::sleep(Duration::from_millis(50)).await;

		debouncer.flush("");
		assert_eq!(drain(&mut rx), vec![""]);

		tokio::time::sleep(Duration::from_secs(1)).await;
		assert!(drain(&mut rx).is_empty());
	}

	#[tokio::test(start_paused = true)]
	async fn test_cancel_drops_pending_value() {
		let (debouncer, mut rx) = Debouncer::new(DEFAULT_DEBOUNCE_DELAY);
		debouncer.notify("rust");
		debouncer.cancel();
		assert!(!debouncer.has_pending());

		tokio::time::sleep(Duration::from_secs(1)).await;
		assert!(drain(&mut rx).is_empty());
	}

	#[tokio::test(start_paused = true)]
	async fn test_custom_delay() {
		let (debouncer, mut rx) = Debouncer::new(Duration::from_millis(40));
		assert_eq!(debouncer.delay(), Duration::from_millis(40));
		debouncer.notify("  padded  ");
		tokio::time::sleep(Duration::from_millis(50)).await;
		assert_eq!(drain(&mut rx), vec!["padded"]);
	}
}
