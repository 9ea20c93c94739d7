// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFound() -> impl IntoView {
	#[cfg(feature = "ssr")]
	if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
		response.set_status(axum::http::StatusCode::NOT_FOUND);
	}

	let location = use_location();

	view! {
		<main id="not_found_page">
			<h1>"Page not found"</h1>
			<p>"Nothing lives at " <code>{move || location.pathname.get()}</code> "."</p>
			<a href="/">"Back to the game"</a>
		</main>
	}
}
