// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Result card rendering.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use quire_search_core::{ResultRecord, DEFAULT_BADGE_LABEL, DEFAULT_PLACEHOLDER_IMAGE};
use tracing::debug;

/// Display format for result dates, e.g. `Mar 05, 2024`.
const DATE_FORMAT: &str = "%b %d, %Y";

/// Defaults substituted for missing optional record fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
	pub placeholder_image: String,
	pub default_image_alt: String,
	pub badge_label: String,
}

impl Default for RenderConfig {
	fn default() -> Self {
		Self {
			placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
			default_image_alt: String::new(),
			badge_label: DEFAULT_BADGE_LABEL.to_string(),
		}
	}
}

/// A rendered result card, ready to append to the results list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
	pub url: String,
	pub html: String,
}

#[derive(Clone, Debug, Default)]
pub struct Renderer {
	config: RenderConfig,
}

impl Renderer {
	pub fn new(config: RenderConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &RenderConfig {
		&self.config
	}

	pub fn render(&self, record: &ResultRecord) -> Fragment {
		let image = record
			.image
			.as_deref()
			.unwrap_or(&self.config.placeholder_image);
		let alt = record
			.image_alt
			.as_deref()
			.unwrap_or(&self.config.default_image_alt);
		let datetime = record.date.as_deref().unwrap_or_default();
		let label = record.date.as_deref().and_then(format_date).unwrap_or_default();

		let html = format!(
			r#"<a href="{url}" class="group block max-w-60 bg-base-100 rounded-lg shadow-md hover:shadow-xl overflow-hidden no-underline text-inherit cursor-pointer">
  <figure class="relative m-0 p-0 rounded-t-lg overflow-hidden">
    <img class="aspect-video w-full object-cover m-0 p-0" src="{image}" alt="{alt}" loading="lazy" />
    <span class="badge badge-ghost absolute top-3 left-3 text-xs opacity-90">{badge}</span>
  </figure>
  <div class="p-4 space-y-4">
    <time class="text-sm text-gray-500" datetime="{datetime}">{label}</time>
    <p class="m-0 p-0 mt-1 sm:text-lg font-primary font-semibold leading-snug line-clamp-3">{title}</p>
  </div>
</a>"#,
			url = escape_html(&record.url),
			image = escape_html(image),
			alt = escape_html(alt),
			badge = escape_html(&self.config.badge_label),
			datetime = escape_html(datetime),
			label = label,
			title = escape_html(&record.title),
		);

		Fragment {
			url: record.url.clone(),
			html,
		}
	}
}

/// Formats an ISO-8601 date (or date-time) as `Mon DD, YYYY`.
///
/// Returns `None` when the value cannot be parsed.
pub fn format_date(value: &str) -> Option<String> {
	let value = value.trim();
	if value.is_empty() {
		return None;
	}

	let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
		.ok()
		.or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
		.or_else(|| {
			NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
				.ok()
				.map(|dt| dt.date())
		});

	match date {
		Some(date) => Some(date.format(DATE_FORMAT).to_string()),
		None => {
			debug!(value = %value, "unparseable result date");
			None
		}
	}
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_format_plain_date() {
		assert_eq!(format_date("2024-03-05").as_deref(), Some("Mar 05, 2024"));
		assert_eq!(format_date("2023-12-31").as_deref(), Some("Dec 31, 2023"));
	}

	#[test]
	fn test_format_rfc3339_date() {
		assert_eq!(
			format_date("2024-07-14T09:30:00Z").as_deref(),
			Some("Jul 14, 2024")
		);
		assert_eq!(
			format_date("2024-07-14T09:30:00").as_deref(),
			Some("Jul 14, 2024")
		);
	}

	#[test]
	fn test_format_invalid_date() {
		assert!(format_date("").is_none());
		assert!(format_date("yesterday").is_none());
		assert!(format_date("2024-13-40").is_none());
	}

	#[test]
	fn test_render_full_record() {
		let record = ResultRecord::new("/posts/tokio/", "Async Rust with Tokio")
			.with_image("/img/tokio.png")
			.with_image_alt("Tokio logo")
			.with_date("2024-03-05");
		let fragment = Renderer::default().render(&record);

		assert_eq!(fragment.url, "/posts/tokio/");
		assert!(fragment.html.contains(r#"href="/posts/tokio/""#));
		assert!(fragment.html.contains(r#"src="/img/tokio.png""#));
		assert!(fragment.html.contains(r#"alt="Tokio logo""#));
		assert!(fragment.html.contains(r#"datetime="2024-03-05">Mar 05, 2024</time>"#));
		assert!(fragment.html.contains("Async Rust with Tokio"));
		assert!(fragment.html.contains(">Tech</span>"));
	}

	#[test]
	fn test_render_missing_optionals_uses_defaults() {
		let record = ResultRecord::new("/a/", "A");
		let fragment = Renderer::default().render(&record);

		assert!(fragment.html.contains(r#"src="/placeholder.jpg""#));
		assert!(fragment.html.contains(r#"alt="""#));
		// The time element is always present to keep card layout stable.
		assert!(fragment.html.contains(r#"<time class="text-sm text-gray-500" datetime=""></time>"#));
	}

	#[test]
	fn test_render_with_custom_config() {
		let renderer = Renderer::new(RenderConfig {
			placeholder_image: "/static/none.webp".to_string(),
			default_image_alt: "Post image".to_string(),
			badge_label: "Docs".to_string(),
		});
		let fragment = renderer.render(&ResultRecord::new("/b/", "B"));

		assert!(fragment.html.contains(r#"src="/static/none.webp""#));
		assert!(fragment.html.contains(r#"alt="Post image""#));
		assert!(fragment.html.contains(">Docs</span>"));
	}

	#[test]
	fn test_render_escapes_markup() {
		let record = ResultRecord::new("/q?a=1&b=2", "<script>alert(\"x\")</script>");
		let fragment = Renderer::default().render(&record);

		assert!(fragment.html.contains(r#"href="/q?a=1&amp;b=2""#));
		assert!(fragment.html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"));
		assert!(!fragment.html.contains("<script>"));
	}

	proptest! {
		#[test]
		fn prop_render_never_panics(
			url in ".*",
			title in ".*",
			image in proptest::option::of(".*"),
			date in proptest::option::of(".*"),
		) {
			let record = ResultRecord {
				url,
				title,
				image,
				image_alt: None,
				date,
			};
			let fragment = Renderer::default().render(&record);
			prop_assert!(fragment.html.contains("<time"));
		}

		#[test]
		fn prop_escaped_text_has_no_raw_brackets(s in ".*") {
			let escaped = escape_html(&s);
			prop_assert!(!escaped.contains('<'));
			prop_assert!(!escaped.contains('>'));
			prop_assert!(!escaped.contains('"'));
		}
	}
}
