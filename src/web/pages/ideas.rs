//! The ideas listing page.

use maud::{html, Markup, Render};

use crate::components::{
    Banner, BaseLayout, ListControls, LoadingIndicator, Pagination, PostGrid,
};
use crate::constants::LOADING_REFRESH_SECS;
use crate::ideas::{ListSnapshot, Location, QueryStateSync, PAGE_PARAM};

/// Parameters for rendering the ideas page.
#[derive(Debug)]
pub struct IdeasPageParams<'a, L> {
    pub snapshot: &'a ListSnapshot,
    pub sync: &'a QueryStateSync<L>,
    /// Banner image and fallback for cards whose image fails to load.
    pub default_image: &'a str,
}

/// Render the full ideas page.
#[must_use]
pub fn render_ideas_page<L: Location>(params: &IdeasPageParams<'_, L>) -> Markup {
    let hero = Banner::new(
        "Ideas",
        "Where all our great things begin",
        params.default_image,
    )
    .render();

    let mut layout = BaseLayout::new("Ideas")
        .with_active_path("/")
        .with_hero(hero);
    if params.snapshot.loading {
        layout = layout.with_refresh(LOADING_REFRESH_SECS);
    }
    layout.render(render_listing(params))
}

/// Controls, cards and page selector.
fn render_listing<L: Location>(params: &IdeasPageParams<'_, L>) -> Markup {
    let snapshot = params.snapshot;
    let result = &snapshot.result;
    let sync = params.sync;

    html! {
        section class="ideas-list" {
            (ListControls::new(result.showing(), sync))
            @if snapshot.loading {
                (LoadingIndicator)
            } @else {
                (PostGrid::new(&result.items, params.default_image))
            }
            (Pagination::new(snapshot.query.page, result.page_count(), |page| {
                sync.href_for(PAGE_PARAM, &page.to_string())
            }))
        }
    }
}
