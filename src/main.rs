// © 2024 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use game_client::config::parse_config;
	use game_client::web::server::run_server;
	use std::sync::Arc;

	tracing_subscriber::fmt::init();

	let config = parse_config("config.kdl").await?;
	tracing::info!(bind_addr = %config.web.bind_addr, title = %config.metadata.title, "Starting game client");

	run_server(Arc::new(config)).await
}

// The browser build mounts through the library's `hydrate` entry point
#[cfg(not(feature = "ssr"))]
fn main() {}
