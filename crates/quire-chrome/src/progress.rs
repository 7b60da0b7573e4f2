// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

/// Reading progress as a percentage in `[0, 100]`.
///
/// Pages shorter than the viewport report 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
	let scrollable = scroll_height - viewport_height;
	if scrollable <= 0.0 || !scrollable.is_finite() {
		return 0.0;
	}
	((scroll_top / scrollable) * 100.0).clamp(0.0, 100.0)
}
