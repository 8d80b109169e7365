//! Listing controls: result summary, page size and sort order.

use maud::{html, Markup, Render};

use crate::components::form::{Form, Label, Select, SelectOption};
use crate::ideas::{
    Location, PerPage, QueryStateSync, ShowingRange, SortOrder, PER_PAGE_PARAM, SORT_PARAM,
};

/// Summary line plus the per-page and sort selects.
///
/// Every option links to the current location with that one parameter
/// changed, so picking a value resets the page to 1.
#[derive(Debug)]
pub struct ListControls<'a, L> {
    pub showing: ShowingRange,
    pub sync: &'a QueryStateSync<L>,
}

impl<'a, L: Location> ListControls<'a, L> {
    #[must_use]
    pub const fn new(showing: ShowingRange, sync: &'a QueryStateSync<L>) -> Self {
        Self { showing, sync }
    }

    fn per_page_select(&self) -> Select<'static> {
        let current = self.sync.query().per_page;
        PerPage::ALL
            .iter()
            .fold(Select::new(PER_PAGE_PARAM).id("per-page"), |select, size| {
                let value = size.to_string();
                let href = self.sync.href_for(PER_PAGE_PARAM, &value);
                select.option(SelectOption::new(value.clone(), value).href(href))
            })
            .selected(current.to_string())
    }

    fn sort_select(&self) -> Select<'static> {
        let current = self.sync.query().sort;
        SortOrder::ALL
            .iter()
            .fold(Select::new(SORT_PARAM).id("sort"), |select, order| {
                let href = self.sync.href_for(SORT_PARAM, order.as_str());
                select.option(SelectOption::new(order.as_str(), order.label()).href(href))
            })
            .selected(current.as_str())
    }
}

impl<L: Location> Render for ListControls<'_, L> {
    fn render(&self) -> Markup {
        let form = Form::get(self.sync.location().path())
            .class("list-controls")
            .fallback_submit("Apply");
        form.render(html! {
            p class="showing" { (self.showing) }
            div class="control-group" {
                (Label::new("per-page", "Show per page:"))
                (self.per_page_select())
            }
            div class="control-group" {
                (Label::new("sort", "Sort by:"))
                (self.sort_select())
            }
        })
    }
}

/// Placeholder rendered while a fetch is in flight.
#[derive(Debug, Clone, Copy)]
pub struct LoadingIndicator;

impl Render for LoadingIndicator {
    fn render(&self) -> Markup {
        html! {
            div class="loading" role="status" { "Loading..." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ideas::MemoryLocation;

    fn sync(query: &str) -> QueryStateSync<MemoryLocation> {
        QueryStateSync::new(MemoryLocation::new("/", query))
    }

    #[test]
    fn test_controls_render_summary_and_labels() {
        let sync = sync("page=2&sort=oldest");
        let showing = ShowingRange {
            start: 11,
            end: 20,
            total: 95,
        };
        let html = ListControls::new(showing, &sync).render().into_string();
        assert!(html.contains("Showing 11 - 20 of 95"));
        assert!(html.contains("Show per page:"));
        assert!(html.contains("Sort by:"));
        assert!(html.contains(r#"<option value="oldest" data-href="#));
        assert!(html.contains(r#"selected>Oldest</option>"#));
        assert!(html.contains(r#"selected>10</option>"#));
    }

    #[test]
    fn test_option_hrefs_reset_page() {
        let sync = sync("page=3&per_page=20");
        let html = ListControls::new(
            ShowingRange {
                start: 41,
                end: 60,
                total: 200,
            },
            &sync,
        )
        .render()
        .into_string();
        assert!(html.contains(r#"data-href="/?page=1&amp;per_page=50""#));
        assert!(html.contains(r#"data-href="/?page=1&amp;per_page=20&amp;sort=oldest""#));
        assert!(!html.contains("page=3"));
    }

    #[test]
    fn test_loading_indicator() {
        assert_eq!(
            LoadingIndicator.render().into_string(),
            r#"<div class="loading" role="status">Loading...</div>"#
        );
    }
}
