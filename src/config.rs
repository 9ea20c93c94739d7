// © 2024 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::metadata::SiteMetadata;
use kdl::{KdlDocument, KdlNode};
use miette::{IntoDiagnostic, Result, bail, miette};
use std::net::SocketAddr;
use tokio::fs::read_to_string;

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	let config = parse_config_document(&config_file_contents)?;
	tracing::debug!(path = config_path, "Loaded configuration");
	Ok(config)
}

pub fn parse_config_document(config_file_contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = config_file_contents.parse()?;

	let web = WebConfig::from_document(section(&document, "web")?.ok_or_else(|| miette!("missing `web` section"))?)?;
	let metadata = match section(&document, "metadata")? {
		Some(metadata) => metadata_from_document(metadata)?,
		None => SiteMetadata::default(),
	};
	let analytics = match section(&document, "analytics")? {
		Some(analytics) => AnalyticsConfig::from_document(analytics)?,
		None => AnalyticsConfig::default(),
	};

	Ok(ConfigData {
		web,
		metadata,
		analytics,
	})
}

#[derive(Clone, Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	pub metadata: SiteMetadata,
	pub analytics: AnalyticsConfig,
}

#[derive(Clone, Debug)]
pub struct WebConfig {
	pub bind_addr: SocketAddr,
}

impl WebConfig {
	fn from_document(document: &KdlDocument) -> Result<Self> {
		let Some(bind_addr) = string_value(document, "bind-addr")? else {
			bail!("missing `web.bind-addr`");
		};
		let bind_addr = bind_addr
			.parse::<SocketAddr>()
			.map_err(|error| miette!("invalid `web.bind-addr` {:?}: {}", bind_addr, error))?;
		Ok(Self { bind_addr })
	}
}

#[derive(Clone, Debug, Default)]
pub struct AnalyticsConfig {
	pub scripts: Vec<String>,
}

impl AnalyticsConfig {
	fn from_document(document: &KdlDocument) -> Result<Self> {
		let mut scripts = Vec::new();
		for node in document.nodes().iter().filter(|node| node.name().value() == "script") {
			let Some(script) = node_string(node)? else {
				bail!("`analytics.script` needs a URL");
			};
			scripts.push(script);
		}
		Ok(Self { scripts })
	}
}

fn metadata_from_document(document: &KdlDocument) -> Result<SiteMetadata> {
	let defaults = SiteMetadata::default();

	let title = string_value(document, "title")?.unwrap_or(defaults.title);
	let description = string_value(document, "description")?.unwrap_or(defaults.description);
	let application_name = string_value(document, "application-name")?.unwrap_or(defaults.application_name);
	let keywords = string_values(document, "keywords")?;
	let authors = document
		.nodes()
		.iter()
		.filter(|node| node.name().value() == "author")
		.filter_map(|node| node_string(node).transpose())
		.collect::<Result<Vec<String>>>()?;
	let site_url = string_value(document, "site-url")?;
	let image_url = string_value(document, "image-url")?;

	Ok(SiteMetadata {
		title,
		description,
		application_name,
		keywords,
		authors,
		site_url,
		image_url,
	})
}

/// Gets the children of a top-level section node
fn section<'a>(document: &'a KdlDocument, name: &str) -> Result<Option<&'a KdlDocument>> {
	match document.get(name) {
		Some(node) => match node.children() {
			Some(children) => Ok(Some(children)),
			None => bail!("`{}` must be a block", name),
		},
		None => Ok(None),
	}
}

fn string_value(document: &KdlDocument, name: &str) -> Result<Option<String>> {
	match document.get(name) {
		Some(node) => match node_string(node)? {
			Some(value) => Ok(Some(value)),
			None => bail!("`{}` needs a value", name),
		},
		None => Ok(None),
	}
}

fn string_values(document: &KdlDocument, name: &str) -> Result<Vec<String>> {
	let Some(node) = document.get(name) else {
		return Ok(Vec::new());
	};
	node.entries()
		.iter()
		.filter(|entry| entry.name().is_none())
		.map(|entry| match entry.value().as_string() {
			Some(value) => Ok(value.to_owned()),
			None => Err(miette!("`{}` values must be strings", node.name().value())),
		})
		.collect()
}

/// Gets the first argument of a node as a string
fn node_string(node: &KdlNode) -> Result<Option<String>> {
	let Some(entry) = node.entries().iter().find(|entry| entry.name().is_none()) else {
		return Ok(None);
	};
	match entry.value().as_string() {
		Some(value) => Ok(Some(value.to_owned())),
		None => bail!("`{}` must be a string", node.name().value()),
	}
}
