//! Wire and domain types for the ideas listing.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::ideas::image::{ImageField, ImageSource};
use crate::ideas::query::ListQuery;

/// Body returned by the remote ideas API (and passed through by the proxy).
///
/// Decoding is lenient: items that are not objects are skipped and a
/// malformed `meta` reads as absent, so one odd value never blanks the page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdeasResponse {
    #[serde(default, deserialize_with = "deserialize_records")]
    pub data: Option<Vec<RawPostRecord>>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub meta: Option<PageMeta>,
}

impl IdeasResponse {
    /// Total number of posts across all pages, 0 when the API omitted it.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.meta.as_ref().and_then(|m| m.total).unwrap_or(0)
    }
}

/// Pagination metadata reported by the remote API. Only the total is used;
/// page numbers are derived locally.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMeta {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total: Option<u64>,
}

/// One untrusted item from the remote API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPostRecord {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub medium_image: ImageField,
    #[serde(default)]
    pub small_image: ImageField,
    #[serde(default)]
    pub image: ImageField,
    #[serde(default)]
    pub featured_image: ImageField,
    #[serde(default)]
    pub thumbnail: ImageField,
    #[serde(default)]
    pub photo: ImageField,
    #[serde(default)]
    pub picture: ImageField,
}

impl RawPostRecord {
    /// Look up an image field by its source tag.
    #[must_use]
    pub fn image_field(&self, source: ImageSource) -> &ImageField {
        match source {
            ImageSource::MediumImage => &self.medium_image,
            ImageSource::SmallImage => &self.small_image,
            ImageSource::FeaturedImage => &self.featured_image,
            ImageSource::Image => &self.image,
            ImageSource::Thumbnail => &self.thumbnail,
            ImageSource::Photo => &self.photo,
            ImageSource::Picture => &self.picture,
            ImageSource::Default => &ImageField::Absent,
        }
    }
}

/// Ids arrive as strings or numbers depending on the API version.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Scalar text. Numbers and booleans are kept as their string form.
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// A non-negative count given as a number or a numeric string.
fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Any value that does not decode as `T` reads as absent.
fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Decode the item list one record at a time, dropping records that fail.
fn deserialize_records<'de, D>(deserializer: D) -> Result<Option<Vec<RawPostRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| RawPostRecord::deserialize(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// A post ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub published_at: String,
    pub image_url: String,
}

/// One fetched page of posts plus its paging numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListResult {
    pub items: Vec<Post>,
    pub total: u64,
    pub current_page: u32,
    pub per_page: u32,
    pub last_page: u32,
}

impl ListResult {
    /// Build a result for `query`, deriving the last page from `total`.
    #[must_use]
    pub fn new(query: &ListQuery, items: Vec<Post>, total: u64) -> Self {
        let per_page = query.per_page.get();
        Self {
            items,
            total,
            current_page: query.page,
            per_page,
            last_page: page_count(total, per_page).max(1),
        }
    }

    /// The result shown after a failed fetch.
    #[must_use]
    pub fn empty(query: &ListQuery) -> Self {
        Self::new(query, Vec::new(), 0)
    }

    /// Number of pages that actually hold posts (0 when there are none).
    #[must_use]
    pub fn page_count(&self) -> u32 {
        page_count(self.total, self.per_page)
    }

    /// The "Showing a - b of n" numbers for this page.
    #[must_use]
    pub fn showing(&self) -> ShowingRange {
        if self.items.is_empty() {
            return ShowingRange {
                start: 0,
                end: 0,
                total: self.total,
            };
        }
        let offset = u64::from(self.current_page.saturating_sub(1)) * u64::from(self.per_page);
        ShowingRange {
            start: offset + 1,
            end: offset + self.items.len() as u64,
            total: self.total,
        }
    }
}

fn page_count(total: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(per_page));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Item range covered by the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowingRange {
    pub start: u64,
    pub end: u64,
    pub total: u64,
}

impl fmt::Display for ShowingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} - {} of {}", self.start, self.end, self.total)
    }
}
