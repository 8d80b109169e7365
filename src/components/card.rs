//! Post cards and the grid that holds them.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use maud::{html, Markup, Render};
use url::form_urlencoded;

use crate::ideas::Post;

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Format a publish timestamp as an Indonesian long date, e.g. `17 Oktober 2026`.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` and bare `YYYY-MM-DD`. Anything
/// else is returned unchanged.
#[must_use]
pub fn format_published_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let date = DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date())
        })
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"));

    match date {
        Ok(date) => format!(
            "{} {} {}",
            date.day(),
            MONTHS_ID[date.month0() as usize],
            date.year()
        ),
        Err(_) => raw.to_string(),
    }
}

/// A single post in the listing.
#[derive(Debug)]
pub struct PostCard<'a> {
    pub post: &'a Post,
    /// Image swapped in when the post's own image fails to load.
    pub fallback_image: &'a str,
}

impl<'a> PostCard<'a> {
    #[must_use]
    pub const fn new(post: &'a Post, fallback_image: &'a str) -> Self {
        Self {
            post,
            fallback_image,
        }
    }

    fn onerror(&self) -> String {
        format!(
            "this.onerror=null;this.src='{}';",
            self.fallback_image.replace('\'', "%27")
        )
    }
}

/// Detail link for a post. The id is one path segment, so every reserved
/// character in it is percent-encoded.
fn post_href(id: &str) -> String {
    let segment: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
    format!("/post/{}", segment.replace('+', "%20"))
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;
        html! {
            article class="post-card" {
                a href=(post_href(&post.id)) {
                    div class="post-card-image" {
                        img src=(post.image_url)
                            alt=(post.title)
                            loading="lazy"
                            onerror=(self.onerror());
                    }
                    div class="post-card-body" {
                        time datetime=(post.published_at) {
                            (format_published_date(&post.published_at))
                        }
                        h3 class="post-card-title" { (post.title) }
                    }
                }
            }
        }
    }
}

/// Grid of post cards, or an empty state when there are none.
#[derive(Debug)]
pub struct PostGrid<'a> {
    pub posts: &'a [Post],
    pub fallback_image: &'a str,
}

impl<'a> PostGrid<'a> {
    #[must_use]
    pub const fn new(posts: &'a [Post], fallback_image: &'a str) -> Self {
        Self {
            posts,
            fallback_image,
        }
    }
}

impl Render for PostGrid<'_> {
    fn render(&self) -> Markup {
        if self.posts.is_empty() {
            return EmptyState::new("No ideas to show yet.").render();
        }
        html! {
            div class="post-grid" {
                @for post in self.posts {
                    (PostCard::new(post, self.fallback_image))
                }
            }
        }
    }
}

/// Placeholder shown when a listing has nothing in it.
#[derive(Debug)]
pub struct EmptyState<'a> {
    pub message: &'a str,
}

impl<'a> EmptyState<'a> {
    #[must_use]
    pub const fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="empty-state" {
                p { (self.message) }
            }
        }
    }
}
