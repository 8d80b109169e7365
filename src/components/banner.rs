//! Page banner shown above the listing.

use maud::{html, Markup, Render};

/// Full-width banner with a background image, title and subtitle.
#[derive(Debug, Clone)]
pub struct Banner<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub image_url: &'a str,
}

impl<'a> Banner<'a> {
    #[must_use]
    pub const fn new(title: &'a str, subtitle: &'a str, image_url: &'a str) -> Self {
        Self {
            title,
            subtitle,
            image_url,
        }
    }
}

impl Render for Banner<'_> {
    fn render(&self) -> Markup {
        html! {
            section class="banner" {
                img class="banner-image" src=(self.image_url) alt="Banner";
                div class="banner-overlay" {}
                div class="banner-text" {
                    h1 { (self.title) }
                    p { (self.subtitle) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_render() {
        let html = Banner::new("Ideas", "Where all our great things begin", "/banner-stock.jpg")
            .render()
            .into_string();
        assert!(html.contains(r#"src="/banner-stock.jpg""#));
        assert!(html.contains("<h1>Ideas</h1>"));
        assert!(html.contains("Where all our great things begin"));
    }
}
