//! Maud HTML template components for the web UI.
//!
//! Components are organized into submodules by functionality:
//!
//! - `layout`: Base page layout, header navigation and footer
//! - `banner`: Hero banner above the listing
//! - `card`: Post cards, the post grid and the empty state
//! - `controls`: Result summary, per-page and sort selects, loading placeholder
//! - `form`: Form, label and navigation select elements
//! - `pagination`: Page selector
//!
//! # Example
//!
//! ```ignore
//! use maud::{html, Markup};
//! use crate::components::{BaseLayout, PostGrid};
//!
//! fn my_page(posts: &[Post]) -> Markup {
//!     let content = html! {
//!         (PostGrid::new(posts, "/banner-stock.jpg"))
//!     };
//!     BaseLayout::new("Ideas").render(content)
//! }
//! ```

pub mod banner;
pub mod card;
pub mod controls;
pub mod form;
pub mod layout;
pub mod pagination;

pub use banner::Banner;
pub use card::{format_published_date, EmptyState, PostCard, PostGrid};
pub use controls::{ListControls, LoadingIndicator};
pub use form::{Form, Label, Select, SelectOption};
pub use layout::BaseLayout;
pub use pagination::Pagination;

/// Re-export maud for convenience
pub use maud::{html, Markup, PreEscaped, DOCTYPE};
