// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::app::App;
use super::document::RootDocument;
use crate::web::settings::ShellSettings;
use leptos::prelude::*;
use leptos_meta::MetaTags;

pub fn shell(options: LeptosOptions, settings: ShellSettings) -> impl IntoView {
	let head = move || {
		let options = options.clone();
		view! {
			<AutoReload options=options.clone() />
			<HydrationScripts options />
			<MetaTags />
		}
	};

	view! {
		<RootDocument settings head>
			<App />
		</RootDocument>
	}
}
