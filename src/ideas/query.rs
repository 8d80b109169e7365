//! Listing parameters and their synchronization with the URL query string.
//!
//! The URL is the source of truth: [`QueryStateSync::query`] re-reads it on
//! every call, and [`QueryStateSync::set_param`] writes back through the
//! injected [`Location`], which only supports replacing the current entry.

use std::fmt;

use url::form_urlencoded;

pub const PAGE_PARAM: &str = "page";
pub const PER_PAGE_PARAM: &str = "per_page";
pub const SORT_PARAM: &str = "sort";

/// Allowed page sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PerPage {
    #[default]
    Ten,
    Twenty,
    Fifty,
}

impl PerPage {
    pub const ALL: [Self; 3] = [Self::Ten, Self::Twenty, Self::Fifty];

    #[must_use]
    pub fn get(self) -> u32 {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
        }
    }

    #[must_use]
    pub fn from_u32(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.get() == value)
    }

    /// Parse a query value; anything outside the allowed set is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse().ok().and_then(Self::from_u32)
    }
}

impl fmt::Display for PerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Listing order by publish date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub const ALL: [Self; 2] = [Self::Newest, Self::Oldest];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value.trim())
    }

    /// Sort expression in the remote API's dialect.
    #[must_use]
    pub fn upstream_sort(self) -> &'static str {
        match self {
            Self::Newest => "-published_at",
            Self::Oldest => "published_at",
        }
    }
}

/// Page, page size and order of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: PerPage,
    pub sort: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: PerPage::default(),
            sort: SortOrder::default(),
        }
    }
}

impl ListQuery {
    /// Parse a raw query string. Missing or invalid values fall back to the
    /// defaults; when a key repeats, its first value is used.
    #[must_use]
    pub fn from_query_str(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut page = None;
        let mut per_page = None;
        let mut sort = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                PAGE_PARAM if page.is_none() => page = Some(value.into_owned()),
                PER_PAGE_PARAM if per_page.is_none() => per_page = Some(value.into_owned()),
                SORT_PARAM if sort.is_none() => sort = Some(value.into_owned()),
                _ => {}
            }
        }

        Self {
            page: page
                .and_then(|p| p.trim().parse::<u32>().ok())
                .filter(|&p| p >= 1)
                .unwrap_or(1),
            per_page: per_page.as_deref().and_then(PerPage::parse).unwrap_or_default(),
            sort: sort.as_deref().and_then(SortOrder::parse).unwrap_or_default(),
        }
    }
}

/// Read/replace access to the navigable location.
pub trait Location {
    /// Path component, e.g. `/`.
    fn path(&self) -> &str;

    /// Current query string without the leading `?`.
    fn query(&self) -> &str;

    /// Replace the current location's query string without adding a history entry.
    fn replace(&mut self, query: String);
}

/// A location held in memory, built from a request URI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    path: String,
    query: String,
}

impl MemoryLocation {
    #[must_use]
    pub fn new(path: &str, query: &str) -> Self {
        Self {
            path: if path.is_empty() { "/" } else { path }.to_string(),
            query: query.strip_prefix('?').unwrap_or(query).to_string(),
        }
    }

    #[must_use]
    pub fn from_uri(uri: &axum::http::Uri) -> Self {
        Self::new(uri.path(), uri.query().unwrap_or(""))
    }
}

impl Location for MemoryLocation {
    fn path(&self) -> &str {
        &self.path
    }

    fn query(&self) -> &str {
        &self.query
    }

    fn replace(&mut self, query: String) {
        self.query = query;
    }
}

fn href(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

/// Keeps a [`ListQuery`] in step with a [`Location`].
#[derive(Debug, Clone)]
pub struct QueryStateSync<L> {
    location: L,
}

impl<L: Location> QueryStateSync<L> {
    pub fn new(location: L) -> Self {
        Self { location }
    }

    /// The listing parameters as currently encoded in the location.
    pub fn query(&self) -> ListQuery {
        ListQuery::from_query_str(self.location.query())
    }

    /// Set one parameter and replace the location with the result.
    ///
    /// Changing anything other than `page` sends the listing back to page 1.
    pub fn set_param(&mut self, name: &str, value: &str) -> ListQuery {
        let updated = apply_param(self.location.query(), name, value);
        self.location.replace(updated);
        self.query()
    }

    /// The href `set_param(name, value)` would navigate to, without navigating.
    pub fn href_for(&self, name: &str, value: &str) -> String {
        href(
            self.location.path(),
            &apply_param(self.location.query(), name, value),
        )
    }

    pub fn location(&self) -> &L {
        &self.location
    }
}

/// Apply one parameter change to a query string, keeping unrelated keys.
fn apply_param(current: &str, name: &str, value: &str) -> String {
    let mut pairs: Vec<(String, String)> = form_urlencoded::parse(current.as_bytes())
        .into_owned()
        .collect();

    upsert(&mut pairs, name, value);
    if name != PAGE_PARAM {
        upsert(&mut pairs, PAGE_PARAM, "1");
    }

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Set `name` to `value` in place of its first occurrence, dropping repeats.
fn upsert(pairs: &mut Vec<(String, String)>, name: &str, value: &str) {
    let mut found = false;
    pairs.retain_mut(|(key, existing)| {
        if key != name {
            return true;
        }
        if found {
            return false;
        }
        found = true;
        *existing = value.to_string();
        true
    });
    if !found {
        pairs.push((name.to_string(), value.to_string()));
    }
}
