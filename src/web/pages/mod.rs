//! Maud-based page templates for the web UI.
//!
//! Each page module exports a render function that produces the complete HTML.

pub mod ideas;

pub use ideas::{render_ideas_page, IdeasPageParams};
