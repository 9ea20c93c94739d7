// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::audit::AnalyticsMode;
use super::metadata::SiteMetadata;
use super::viewport::Viewport;
use serde::{Deserialize, Serialize};

/// Everything the root document needs besides the page content
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ShellSettings {
	pub metadata: SiteMetadata,
	pub viewport: Viewport,
	pub analytics: AnalyticsMode,
	pub analytics_scripts: Vec<String>,
}

#[cfg(feature = "ssr")]
impl ShellSettings {
	pub fn from_config(config: &crate::config::ConfigData, ci_audit: bool) -> Self {
		Self {
			metadata: config.metadata.clone(),
			viewport: Viewport::default(),
			analytics: AnalyticsMode::for_ci_audit(ci_audit),
			analytics_scripts: config.analytics.scripts.clone(),
		}
	}
}
