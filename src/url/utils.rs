//! Path segment helpers.
//!
//! Segments follow `pathname.split('/')` exactly: the leading slash yields an
//! empty segment 0, so `/owner/repo` is `["", "owner", "repo"]` and a trailing
//! slash adds one more empty segment.

use url::form_urlencoded;

/// Split a pathname into its '/'-delimited segments, keeping empty ones.
///
/// # Examples
///
/// ```
/// use linkparser::url::segments;
///
/// assert_eq!(segments("/torvalds/linux"), vec!["", "torvalds", "linux"]);
/// assert_eq!(segments("/"), vec!["", ""]);
/// ```
pub fn segments(pathname: &str) -> Vec<&str> {
    pathname.split('/').collect()
}

/// Number of segments, counting the empty leading one.
pub fn segment_count(pathname: &str) -> usize {
    pathname.split('/').count()
}

/// Segment at `index`, or an empty string when the path is shorter.
///
/// # Examples
///
/// ```
/// use linkparser::url::segment;
///
/// assert_eq!(segment("/torvalds/linux", 2), "linux");
/// assert_eq!(segment("/torvalds", 2), "");
/// ```
pub fn segment(pathname: &str, index: usize) -> &str {
    pathname.split('/').nth(index).unwrap_or_default()
}

/// Segments from `index` onwards joined back with `/`.
///
/// # Examples
///
/// ```
/// use linkparser::url::joined_from;
///
/// assert_eq!(joined_from("/posts/tech/hello-world", 2), "tech/hello-world");
/// assert_eq!(joined_from("/posts", 2), "");
/// ```
pub fn joined_from(pathname: &str, index: usize) -> String {
    pathname
        .split('/')
        .skip(index)
        .collect::<Vec<_>>()
        .join("/")
}

/// Look up a key in a raw query string, decoding it.
///
/// # Examples
///
/// ```
/// use linkparser::url::query_value;
///
/// assert_eq!(query_value("v=dQw4w9WgXcQ&t=42", "v"), Some("dQw4w9WgXcQ".to_string()));
/// assert_eq!(query_value("t=42", "v"), None);
/// ```
pub fn query_value(query: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
