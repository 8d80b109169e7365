//! Shared constants used across the application.

/// Remote content API endpoint that serves the ideas listing.
pub const DEFAULT_IDEAS_API_URL: &str = "https://suitmedia-backend.suitdev.com/api/ideas";

/// Host prefixed to image paths that start with `/`.
pub const DEFAULT_STATIC_ASSETS_HOST: &str = "https://suitmedia.static-assets.id";

/// Host prefixed to any other relative image path.
pub const DEFAULT_BACKEND_HOST: &str = "https://suitmedia-backend.suitdev.com";

/// Local asset shown when a post carries no usable image.
pub const DEFAULT_IMAGE_PATH: &str = "/banner-stock.jpg";

/// How long a page request waits for the listing before rendering the
/// loading placeholder instead.
pub const DEFAULT_PAGE_RENDER_BUDGET_SECS: u64 = 10;

/// Refresh interval, in seconds, of a page rendered while its listing was
/// still loading.
pub const LOADING_REFRESH_SECS: u32 = 2;

/// User agent sent on outbound API requests.
pub const USER_AGENT: &str = concat!("ideas-board/", env!("CARGO_PKG_VERSION"));
