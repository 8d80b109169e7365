//! The post-list data pipeline.
//!
//! `query` turns the page URL into a [`ListQuery`], `fetcher` asks an
//! [`IdeasSource`] for that page and maps every raw item through the
//! [`ImageResolver`], and `pagination` derives the page-selector layout from
//! the resulting [`ListResult`].

pub mod fetcher;
pub mod image;
pub mod model;
pub mod pagination;
pub mod query;
pub mod source;

pub use fetcher::{ListSnapshot, PostsFetcher};
pub use image::{ImageDescriptor, ImageField, ImageResolver, ImageSource, Resolution};
pub use model::{IdeasResponse, ListResult, PageMeta, Post, RawPostRecord, ShowingRange};
pub use pagination::{plan, Control, PageSelectorEntry};
pub use query::{
    ListQuery, Location, MemoryLocation, PerPage, QueryStateSync, SortOrder, PAGE_PARAM,
    PER_PAGE_PARAM, SORT_PARAM,
};
pub use source::{FetchError, IdeasSource, ProxyClient, UpstreamClient};
