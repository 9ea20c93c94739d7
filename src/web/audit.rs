// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Environment variable set by CI when running automated audits (e.g. Lighthouse) against the site
pub const CI_AUDIT_VAR: &str = "CI_AUDIT";

/// Whether the given value of the CI audit variable enables audit mode.
/// Only the exact string `true` does; anything else, including no value, doesn't.
pub fn is_ci_audit(value: Option<&str>) -> bool {
	value == Some("true")
}

/// Reads the CI audit flag from the process environment.
pub fn ci_audit_from_env() -> bool {
	let value = std::env::var(CI_AUDIT_VAR).ok();
	is_ci_audit(value.as_deref())
}

/// Whether analytics scripts are included in rendered pages
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum AnalyticsMode {
	#[default]
	Include,
	/// Used while CI audits run
	Omit,
}

impl AnalyticsMode {
	pub fn for_ci_audit(ci_audit: bool) -> Self {
		if ci_audit { Self::Omit } else { Self::Include }
	}
}
