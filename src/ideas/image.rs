//! Image URL resolution for raw post records.
//!
//! Upstream items carry their image under one of several field names, and
//! each field may hold a plain URL, a descriptor object, or a list of
//! descriptors. [`ImageField`] captures those shapes; [`ImageResolver`]
//! walks the fields in a fixed priority order and turns the first usable
//! path into an absolute URL.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::constants::{DEFAULT_BACKEND_HOST, DEFAULT_IMAGE_PATH, DEFAULT_STATIC_ASSETS_HOST};
use crate::ideas::model::{Post, RawPostRecord};

/// A structured image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub url: String,
    pub width: Option<u64>,
    pub height: Option<u64>,
    pub mime: Option<String>,
    pub size: Option<u64>,
}

/// One image-bearing field of a raw record, in whatever shape it arrived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageField {
    #[default]
    Absent,
    Url(String),
    Descriptor(ImageDescriptor),
    Sequence(Vec<ImageField>),
    /// Numbers, booleans, or objects without a string `url`.
    Unsupported,
}

impl ImageField {
    /// Extract the raw image path, if this field holds one.
    ///
    /// Sequences only ever look at their first element.
    #[must_use]
    pub fn extract(&self) -> Option<&str> {
        match self {
            Self::Sequence(items) => items.first().and_then(Self::extract),
            Self::Descriptor(descriptor) => non_empty(&descriptor.url),
            Self::Url(url) => non_empty(url),
            Self::Absent | Self::Unsupported => None,
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

impl From<Value> for ImageField {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::String(url) => Self::Url(url),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => descriptor_from_map(&map).map_or(Self::Unsupported, Self::Descriptor),
            Value::Bool(_) | Value::Number(_) => Self::Unsupported,
        }
    }
}

fn descriptor_from_map(map: &Map<String, Value>) -> Option<ImageDescriptor> {
    let url = map.get("url")?.as_str()?.to_string();
    Some(ImageDescriptor {
        url,
        width: map.get("width").and_then(Value::as_u64),
        height: map.get("height").and_then(Value::as_u64),
        mime: map.get("mime").and_then(Value::as_str).map(String::from),
        size: map.get("size").and_then(Value::as_u64),
    })
}

impl<'de> Deserialize<'de> for ImageField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// Where a resolved image URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    MediumImage,
    SmallImage,
    FeaturedImage,
    Image,
    Thumbnail,
    Photo,
    Picture,
    /// No field yielded a path; the default asset was used.
    Default,
}

impl ImageSource {
    /// Image fields in the order they are consulted.
    pub const PRIORITY: [Self; 7] = [
        Self::MediumImage,
        Self::SmallImage,
        Self::FeaturedImage,
        Self::Image,
        Self::Thumbnail,
        Self::Photo,
        Self::Picture,
    ];

    /// Field name as it appears in the upstream payload.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Self::MediumImage => "medium_image",
            Self::SmallImage => "small_image",
            Self::FeaturedImage => "featured_image",
            Self::Image => "image",
            Self::Thumbnail => "thumbnail",
            Self::Photo => "photo",
            Self::Picture => "picture",
            Self::Default => "default",
        }
    }
}

/// Outcome of resolving one record's image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub source: ImageSource,
    pub url: String,
}

/// Turns raw record image fields into one absolute URL.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    static_host: String,
    backend_host: String,
    default_path: String,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new(
            DEFAULT_STATIC_ASSETS_HOST,
            DEFAULT_BACKEND_HOST,
            DEFAULT_IMAGE_PATH,
        )
    }
}

impl ImageResolver {
    #[must_use]
    pub fn new(static_host: &str, backend_host: &str, default_path: &str) -> Self {
        Self {
            static_host: static_host.to_string(),
            backend_host: backend_host.to_string(),
            default_path: default_path.to_string(),
        }
    }

    /// Path of the fallback asset.
    #[must_use]
    pub fn default_path(&self) -> &str {
        &self.default_path
    }

    /// Resolve the image URL for a record, reporting which field supplied it.
    #[must_use]
    pub fn resolve(&self, record: &RawPostRecord) -> Resolution {
        ImageSource::PRIORITY
            .iter()
            .find_map(|&source| {
                record.image_field(source).extract().map(|raw| Resolution {
                    source,
                    url: self.build_url(Some(raw)),
                })
            })
            .unwrap_or_else(|| Resolution {
                source: ImageSource::Default,
                url: self.build_url(None),
            })
    }

    /// Build an absolute URL from an extracted raw path.
    #[must_use]
    pub fn build_url(&self, raw: Option<&str>) -> String {
        match raw {
            None => self.default_path.clone(),
            Some(path) if has_http_scheme(path) => path.to_string(),
            Some(path) if path.starts_with('/') => format!("{}{path}", self.static_host),
            Some(path) => format!("{}{path}", self.backend_host),
        }
    }

    /// Convert a raw record into a displayable post.
    #[must_use]
    pub fn to_post(&self, record: RawPostRecord) -> Post {
        let resolution = self.resolve(&record);
        debug!(
            id = %record.id,
            source = resolution.source.field_name(),
            "Resolved post image"
        );
        Post {
            id: record.id,
            title: record.title.unwrap_or_default(),
            published_at: record.published_at.unwrap_or_default(),
            image_url: resolution.url,
        }
    }
}

fn has_http_scheme(path: &str) -> bool {
    let lower = path.get(..8).unwrap_or(path).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
