//! Ideas board library.
//!
//! Serves a paginated listing of "ideas" posts fetched from a remote content
//! API, plus an `/api/ideas` proxy route that speaks that API's dialect.

// Allow raw string hashes for safety - they're harmless and prevent issues if content changes
#![allow(clippy::needless_raw_string_hashes)]

pub mod components;
pub mod config;
pub mod constants;
pub mod ideas;
pub mod web;
