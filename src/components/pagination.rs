//! Pagination component for navigating through multi-page content.
//!
//! Renders the layout produced by [`plan`]: first and previous controls,
//! page numbers with ellipses, then next and last controls. Links replace
//! the current history entry instead of pushing a new one.

use maud::{html, Markup, Render};

use crate::ideas::{plan, Control, PageSelectorEntry};

/// Inline handler that navigates without adding a history entry.
pub const REPLACE_ON_CLICK: &str = "location.replace(this.href);return false;";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Item {
    entry: PageSelectorEntry,
    href: Option<String>,
}

/// Page selector for a listing.
#[derive(Debug, Clone)]
pub struct Pagination {
    items: Vec<Item>,
}

impl Pagination {
    /// Lay out `current_page` of `last_page`, linking each page through `href_for`.
    #[must_use]
    pub fn new(current_page: u32, last_page: u32, href_for: impl Fn(u32) -> String) -> Self {
        let items = plan(current_page, last_page)
            .into_iter()
            .map(|entry| {
                let href = match entry {
                    PageSelectorEntry::Control {
                        target,
                        enabled: true,
                        ..
                    } => Some(href_for(target)),
                    PageSelectorEntry::Page {
                        number,
                        current: false,
                    } => Some(href_for(number)),
                    _ => None,
                };
                Item { entry, href }
            })
            .collect();
        Self { items }
    }

    fn control_label(control: Control) -> (&'static str, &'static str) {
        match control {
            Control::First => ("\u{00ab}", "First page"),
            Control::Previous => ("\u{2039}", "Previous page"),
            Control::Next => ("\u{203a}", "Next page"),
            Control::Last => ("\u{00bb}", "Last page"),
        }
    }

    fn render_item(item: &Item) -> Markup {
        match (item.entry, item.href.as_deref()) {
            (PageSelectorEntry::Control { control, .. }, href) => {
                let (symbol, label) = Self::control_label(control);
                html! {
                    @if let Some(href) = href {
                        a href=(href) class="control" aria-label=(label) onclick=(REPLACE_ON_CLICK) { (symbol) }
                    } @else {
                        span class="control disabled" aria-label=(label) aria-disabled="true" { (symbol) }
                    }
                }
            }
            (PageSelectorEntry::Page { number, .. }, Some(href)) => html! {
                a href=(href) onclick=(REPLACE_ON_CLICK) { (number) }
            },
            (PageSelectorEntry::Page { number, .. }, None) => html! {
                span class="current" aria-current="page" { (number) }
            },
            (PageSelectorEntry::Ellipsis, _) => html! {
                span class="ellipsis" { "..." }
            },
        }
    }
}

impl Render for Pagination {
    fn render(&self) -> Markup {
        html! {
            nav class="pagination" aria-label="Pagination" {
                @for item in &self.items {
                    (Self::render_item(item))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn href(page: u32) -> String {
        format!("/?page={page}")
    }

    #[test]
    fn test_first_page_disables_back_controls() {
        let html = Pagination::new(1, 10, href).render().into_string();
        assert!(html.contains(
            r#"<span class="control disabled" aria-label="First page" aria-disabled="true">"#
        ));
        assert!(html.contains(
            r#"<span class="control disabled" aria-label="Previous page" aria-disabled="true">"#
        ));
        assert!(html.contains(r#"<span class="current" aria-current="page">1</span>"#));
        assert!(html.contains(r#"href="/?page=2" class="control" aria-label="Next page""#));
        assert!(html.contains(r#"href="/?page=10" class="control" aria-label="Last page""#));
    }

    #[test]
    fn test_middle_page_has_ellipses() {
        let html = Pagination::new(5, 10, href).render().into_string();
        assert_eq!(html.matches(r#"<span class="ellipsis">...</span>"#).count(), 2);
        for page in [1, 3, 4, 6, 7, 10] {
            assert!(html.contains(&format!(r#"href="/?page={page}""#)), "page {page}");
        }
        assert!(!html.contains(r#"href="/?page=2""#));
        assert!(html.contains(r#"onclick="location.replace(this.href);return false;""#));
    }

    #[test]
    fn test_last_page_disables_forward_controls() {
        let html = Pagination::new(10, 10, href).render().into_string();
        assert!(html.contains(r#"aria-label="Next page" aria-disabled="true""#));
        assert!(html.contains(r#"aria-label="Last page" aria-disabled="true""#));
        assert!(html.contains(r#"href="/?page=9" class="control" aria-label="Previous page""#));
    }

    #[test]
    fn test_no_pages_renders_only_disabled_controls() {
        let html = Pagination::new(1, 0, href).render().into_string();
        assert!(!html.contains("href="));
        assert_eq!(html.matches("aria-disabled").count(), 4);
    }
}
