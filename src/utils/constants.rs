//! Shared configuration constants for lexscrape
//!
//! Default values used by the configuration layer and the source loader.

/// Element name the legal portals use for the document title
pub const DEFAULT_TITLE_TAG: &str = "h2";

/// Element name the legal portals use for every structural heading
/// (sections, chapters, transitional provisions and their parts)
pub const DEFAULT_HEADING_TAG: &str = "h4";

/// Encoding assumed when the source declares none
///
/// The portals serve ISO-8859-1; `encoding_rs` resolves this label to
/// windows-1252, which is a superset for printable text.
pub const DEFAULT_SOURCE_ENCODING: &str = "iso-8859-1";

/// Maximum source size accepted by the loader (10 MB)
pub const MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

/// HTTP request timeout for remote sources
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// User agent sent when fetching remote sources
pub const DEFAULT_USER_AGENT: &str = concat!("kodegen-lexscrape/", env!("CARGO_PKG_VERSION"));

/// How many bytes of the source are scanned for a `<meta charset>` declaration
pub const CHARSET_SNIFF_BYTES: usize = 1024;

/// Maximum characters of node text included in trace logs
pub const LOG_PREVIEW_CHARS: usize = 60;
