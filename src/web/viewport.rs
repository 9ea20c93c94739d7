// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const INITIAL_SCALE: f64 = 1.0;
pub const MAXIMUM_SCALE: f64 = 5.0;
pub const LIGHT_THEME_COLOR: &str = "#ffffff";
pub const DARK_THEME_COLOR: &str = "#000000";

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ViewportWidth {
	DeviceWidth,
	Pixels(u32),
}

impl fmt::Display for ViewportWidth {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::DeviceWidth => write!(f, "device-width"),
			Self::Pixels(width) => write!(f, "{}", width),
		}
	}
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ColorScheme {
	Light,
	Dark,
}

impl ColorScheme {
	pub fn media_query(&self) -> &'static str {
		match self {
			Self::Light => "(prefers-color-scheme: light)",
			Self::Dark => "(prefers-color-scheme: dark)",
		}
	}
}

/// Theme colors, one per supported color scheme
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ThemeColors {
	pub light: String,
	pub dark: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ThemeColorEntry {
	pub scheme: ColorScheme,
	pub color: String,
}

impl ThemeColors {
	pub fn entries(&self) -> [ThemeColorEntry; 2] {
		[
			ThemeColorEntry {
				scheme: ColorScheme::Light,
				color: self.light.clone(),
			},
			ThemeColorEntry {
				scheme: ColorScheme::Dark,
				color: self.dark.clone(),
			},
		]
	}

	pub fn color_for(&self, scheme: ColorScheme) -> &str {
		match scheme {
			ColorScheme::Light => &self.light,
			ColorScheme::Dark => &self.dark,
		}
	}
}

impl Default for ThemeColors {
	fn default() -> Self {
		Self {
			light: String::from(LIGHT_THEME_COLOR),
			dark: String::from(DARK_THEME_COLOR),
		}
	}
}

/// Browser rendering hints for the page: zoom limits and per-scheme theme color
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Viewport {
	pub width: ViewportWidth,
	pub initial_scale: f64,
	pub maximum_scale: f64,
	pub theme_color: ThemeColors,
}

impl Viewport {
	/// Value of the `content` attribute of the viewport meta tag
	pub fn content(&self) -> String {
		format!(
			"width={}, initial-scale={}, maximum-scale={}",
			self.width, self.initial_scale, self.maximum_scale
		)
	}
}

impl Default for Viewport {
	fn default() -> Self {
		Self {
			width: ViewportWidth::DeviceWidth,
			initial_scale: INITIAL_SCALE,
			maximum_scale: MAXIMUM_SCALE,
			theme_color: ThemeColors::default(),
		}
	}
}
