//! Base layout components for the web UI.
//!
//! This module provides the main page layout structure including
//! the HTML skeleton, site header navigation, and footer.

use maud::{html, Markup, DOCTYPE};

/// Site navigation entries as (label, href).
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Work", "/ideas"),
    ("About", "/about"),
    ("Services", "/services"),
    ("Ideas", "/"),
    ("Careers", "/careers"),
    ("Contact", "/contact"),
];

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("Ideas").with_active_path("/").render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    active_path: &'a str,
    hero: Option<Markup>,
    refresh_secs: Option<u32>,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title.
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            active_path: "/",
            hero: None,
            refresh_secs: None,
        }
    }

    /// Mark the navigation entry whose href equals `path` as current.
    #[must_use]
    pub fn with_active_path(mut self, path: &'a str) -> Self {
        self.active_path = path;
        self
    }

    /// Full-width markup placed between the header and the main container.
    #[must_use]
    pub fn with_hero(mut self, hero: Markup) -> Self {
        self.hero = Some(hero);
        self
    }

    /// Ask the browser to reload the page after `secs` seconds.
    #[must_use]
    pub fn with_refresh(mut self, secs: u32) -> Self {
        self.refresh_secs = Some(secs);
        self
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    @if let Some(secs) = self.refresh_secs {
                        meta http-equiv="refresh" content=(secs);
                    }
                    title { (self.title) " - Suitmedia" }
                    link rel="stylesheet" href="/static/css/style.css";
                }
                body {
                    (self.render_header())
                    @if let Some(ref hero) = self.hero {
                        (hero)
                    }
                    main class="container" {
                        (content)
                    }
                    (Self::render_footer())
                }
            }
        }
    }

    /// Render the page header with navigation.
    fn render_header(&self) -> Markup {
        html! {
            header class="site-header" {
                a href="/" class="site-logo" { "Suitmedia" }
                nav {
                    ul {
                        @for (label, href) in NAV_LINKS {
                            li {
                                @if *href == self.active_path {
                                    a href=(href) class="active" aria-current="page" { (label) }
                                } @else {
                                    a href=(href) { (label) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    fn render_footer() -> Markup {
        html! {
            footer class="container" {
                small { "Suitmedia Ideas" }
            }
        }
    }
}
