// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::audit::AnalyticsMode;
use crate::web::metadata::SiteMetadata;
use crate::web::settings::ShellSettings;
use crate::web::viewport::Viewport;
use leptos::prelude::*;

/// The HTML document every page is rendered in.
/// `head` is rendered at the end of `<head>`; the children are placed in `<body>` untouched.
#[component]
pub fn RootDocument(settings: ShellSettings, #[prop(optional, into)] head: Option<ViewFn>, children: Children) -> impl IntoView {
	let ShellSettings {
		metadata,
		viewport,
		analytics,
		analytics_scripts,
	} = settings;

	view! {
		<!DOCTYPE html>
		<html lang="en">
			<head>
				<meta charset="utf-8" />
				<ViewportTags viewport />
				<MetadataTags metadata />
				{head.map(|head| head.run())}
			</head>
			<body>
				{children()}
				<AnalyticsScripts mode=analytics scripts=analytics_scripts />
			</body>
		</html>
	}
}

#[component]
fn ViewportTags(viewport: Viewport) -> impl IntoView {
	let theme_colors = viewport
		.theme_color
		.entries()
		.into_iter()
		.map(|entry| {
			leptos::html::meta()
				.name("theme-color")
				.attr("media", entry.scheme.media_query())
				.content(entry.color)
		})
		.collect_view();

	view! {
		<meta name="viewport" content=viewport.content() />
		{theme_colors}
	}
}

#[component]
fn MetadataTags(metadata: SiteMetadata) -> impl IntoView {
	let keywords = metadata
		.keywords_content()
		.map(|keywords| view! { <meta name="keywords" content=keywords /> });
	let authors = metadata
		.authors
		.iter()
		.map(|author| view! { <meta name="author" content=author.clone() /> })
		.collect_view();
	let site_url = metadata.site_url.clone().map(|url| {
		view! {
			<link rel="canonical" href=url.clone() />
			{open_graph("og:url", url)}
		}
	});
	let image = metadata
		.image_url
		.clone()
		.map(|url| open_graph("og:image", url));
	let twitter_card = metadata.twitter_card();

	view! {
		<title>{metadata.title.clone()}</title>
		<meta name="description" content=metadata.description.clone() />
		<meta name="application-name" content=metadata.application_name.clone() />
		{keywords}
		{authors}
		{site_url}
		{open_graph("og:type", String::from("website"))}
		{open_graph("og:title", metadata.title.clone())}
		{open_graph("og:description", metadata.description.clone())}
		{image}
		<meta name="twitter:card" content=twitter_card />
	}
}

fn open_graph(property: &'static str, content: String) -> impl IntoView {
	leptos::html::meta().attr("property", property).content(content)
}

#[component]
fn AnalyticsScripts(mode: AnalyticsMode, scripts: Vec<String>) -> impl IntoView {
	match mode {
		AnalyticsMode::Include => scripts
			.into_iter()
			.map(|src| view! { <script src=src defer=true></script> })
			.collect_view()
			.into_any(),
		AnalyticsMode::Omit => ().into_any(),
	}
}
