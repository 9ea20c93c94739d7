// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Rendering type-erased views to HTML needs the server renderer
#![cfg(feature = "ssr")]

use game_client::web::audit::AnalyticsMode;
use game_client::web::metadata::SiteMetadata;
use game_client::web::pages::document::RootDocument;
use game_client::web::settings::ShellSettings;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

const PAGE_CONTENT: &str = "Unique page content 4f1c";

fn render(settings: ShellSettings) -> String {
	Owner::new().with(|| {
		view! {
			<RootDocument settings>
				<p id="page_content">{PAGE_CONTENT}</p>
			</RootDocument>
		}
		.to_html()
	})
}

fn body_of(html: &str) -> &str {
	let start = html.find("<body").expect("no <body>");
	let end = html.find("</body>").expect("no </body>");
	&html[start..end]
}

#[test]
fn wraps_children_once_in_body() {
	let html = render(ShellSettings::default());

	assert!(html.contains("<!DOCTYPE html>"));
	assert_eq!(html.matches("<html").count(), 1);
	assert_eq!(html.matches(r#"<html lang="en""#).count(), 1);
	assert_eq!(html.matches("<body").count(), 1);
	assert_eq!(html.matches("</body>").count(), 1);
	assert_eq!(html.matches(PAGE_CONTENT).count(), 1);
	assert!(body_of(&html).contains(PAGE_CONTENT));
	assert!(body_of(&html).contains(r#"<p id="page_content">"#));
}

#[test]
fn renders_viewport_tags() {
	let html = render(ShellSettings::default());

	assert!(html.contains(r#"content="width=device-width, initial-scale=1, maximum-scale=5""#));
	assert_eq!(html.matches(r#"name="theme-color""#).count(), 2);
	assert!(html.contains(r##"media="(prefers-color-scheme: light)" content="#ffffff""##));
	assert!(html.contains(r##"media="(prefers-color-scheme: dark)" content="#000000""##));
}

#[test]
fn renders_metadata_in_head() {
	let settings = ShellSettings {
		metadata: SiteMetadata {
			title: String::from("Skirmish"),
			description: String::from("A tactics game"),
			application_name: String::from("Skirmish Online"),
			keywords: vec![String::from("game"), String::from("tactics")],
			authors: vec![String::from("Ada")],
			site_url: Some(String::from("https://skirmish.example")),
			image_url: Some(String::from("https://skirmish.example/preview.png")),
		},
		..ShellSettings::default()
	};
	let html = render(settings);
	let head_end = html.find("</head>").expect("no </head>");
	let head = &html[..head_end];

	assert!(head.contains("<title>Skirmish</title>"));
	assert!(head.contains(r#"content="A tactics game""#));
	assert!(head.contains(r#"content="Skirmish Online""#));
	assert!(head.contains(r#"content="game, tactics""#));
	assert!(head.contains(r#"name="author" content="Ada""#));
	assert!(head.contains(r#"rel="canonical" href="https://skirmish.example""#));
	assert!(head.contains(r#"content="https://skirmish.example/preview.png""#));
	assert!(head.contains(r#"content="summary_large_image""#));
	assert!(head.contains(r#"property="og:title" content="Skirmish""#));
	assert!(head.contains(r#"property="og:description" content="A tactics game""#));
	assert!(head.contains(r#"property="og:type" content="website""#));
	assert!(head.contains(r#"property="og:url" content="https://skirmish.example""#));
	assert!(head.contains(r#"property="og:image" content="https://skirmish.example/preview.png""#));
}

#[test]
fn theme_colors_are_emitted_per_scheme() {
	let html = render(ShellSettings::default());
	let head_end = html.find("</head>").expect("no </head>");
	let head = &html[..head_end];

	assert!(head.contains(
		r##"<meta name="theme-color" media="(prefers-color-scheme: light)" content="#ffffff">"##
	));
	assert!(head.contains(
		r##"<meta name="theme-color" media="(prefers-color-scheme: dark)" content="#000000">"##
	));
	assert_eq!(head.matches("prefers-color-scheme").count(), 2);
}

#[test]
fn empty_head_leaves_no_placeholder() {
	let html = render(ShellSettings::default());
	assert!(!html.contains("<()"));
}

#[test]
fn omits_optional_metadata() {
	let html = render(ShellSettings::default());

	assert!(html.contains("<title>Game Client</title>"));
	assert!(!html.contains(r#"name="keywords""#));
	assert!(!html.contains(r#"name="author""#));
	assert!(!html.contains(r#"rel="canonical""#));
	assert!(html.contains(r#"content="summary""#));
}

#[test]
fn default_shell_injects_no_scripts() {
	let html = render(ShellSettings::default());
	assert!(!html.contains("<script"));

	let audit = ShellSettings {
		analytics: AnalyticsMode::for_ci_audit(true),
		..ShellSettings::default()
	};
	assert!(!render(audit).contains("<script"));
}

#[test]
fn analytics_scripts_follow_page_content() {
	let settings = ShellSettings {
		analytics: AnalyticsMode::Include,
		analytics_scripts: vec![
			String::from("https://stats.example/a.js"),
			String::from("https://stats.example/b.js"),
		],
		..ShellSettings::default()
	};
	let html = render(settings);
	let body = body_of(&html);

	assert_eq!(html.matches("<script").count(), 2);
	assert_eq!(body.matches("https://stats.example/a.js").count(), 1);
	assert_eq!(body.matches("https://stats.example/b.js").count(), 1);
	let content_at = body.find(PAGE_CONTENT).expect("no page content");
	let script_at = body.find("<script").expect("no script");
	assert!(content_at < script_at);
}

#[test]
fn ci_audit_omits_analytics_scripts() {
	let settings = ShellSettings {
		analytics: AnalyticsMode::for_ci_audit(true),
		analytics_scripts: vec![String::from("https://stats.example/a.js")],
		..ShellSettings::default()
	};
	let html = render(settings);

	assert!(!html.contains("<script"));
	assert!(!html.contains("stats.example"));
	assert_eq!(html.matches(PAGE_CONTENT).count(), 1);
}

#[test]
fn rendering_is_deterministic() {
	let first = render(ShellSettings::default());
	let second = render(ShellSettings::default());
	assert_eq!(first, second);

	let settings = ShellSettings {
		analytics_scripts: vec![String::from("https://stats.example/a.js")],
		..ShellSettings::default()
	};
	assert_eq!(render(settings.clone()), render(settings));
}

#[test]
fn head_content_is_rendered_in_head() {
	let html = Owner::new().with(|| {
		view! {
			<RootDocument settings=ShellSettings::default() head=|| view! { <link rel="icon" href="/favicon.ico" /> }>
				<p>{PAGE_CONTENT}</p>
			</RootDocument>
		}
		.to_html()
	});

	let head_end = html.find("</head>").expect("no </head>");
	let icon_at = html.find(r#"href="/favicon.ico""#).expect("no head content");
	assert!(icon_at < head_end);
	assert_eq!(html.matches(PAGE_CONTENT).count(), 1);
}
