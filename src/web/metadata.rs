// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Page title, description, and the other fields search engines and link previews read.
/// Values come from the site configuration and are rendered as given.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SiteMetadata {
	pub title: String,
	pub description: String,
	pub application_name: String,
	pub keywords: Vec<String>,
	pub authors: Vec<String>,
	pub site_url: Option<String>,
	pub image_url: Option<String>,
}

impl SiteMetadata {
	pub fn keywords_content(&self) -> Option<String> {
		if self.keywords.is_empty() {
			None
		} else {
			Some(self.keywords.join(", "))
		}
	}

	pub fn twitter_card(&self) -> &'static str {
		if self.image_url.is_some() {
			"summary_large_image"
		} else {
			"summary"
		}
	}
}

impl Default for SiteMetadata {
	fn default() -> Self {
		Self {
			title: String::from("Game Client"),
			description: String::from("Play in your browser."),
			application_name: String::from("Game Client"),
			keywords: Vec::new(),
			authors: Vec::new(),
			site_url: None,
			image_url: None,
		}
	}
}
