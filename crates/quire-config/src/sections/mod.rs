// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

pub mod chrome;
pub mod logging;
pub mod render;
pub mod search;

pub use chrome::{NavbarConfig, NavbarConfigLayer, ThemeConfig, ThemeConfigLayer};
pub use logging::{LogFormat, LoggingConfig, LoggingConfigLayer};
pub use render::{RenderConfig, RenderConfigLayer};
pub use search::{SearchConfig, SearchConfigLayer};
