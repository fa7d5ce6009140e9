//! The decomposed URL value every predicate and extractor works on.

use url::Url;

use crate::error::LinkError;

/// An already-parsed URL reduced to the parts classification looks at.
///
/// Mirrors what a browser exposes on a `URL` object: `hostname` is the
/// lowercased host without port, `pathname` keeps its percent-encoding,
/// `hash` carries the leading `#` (or is empty) and `query` is the raw query
/// string without `?`.
///
/// # Examples
///
/// ```
/// use linkparser::ParsedUrl;
///
/// let url = ParsedUrl::parse("https://GitHub.com/torvalds/linux?tab=readme#top").unwrap();
/// assert_eq!(url.hostname(), "github.com");
/// assert_eq!(url.pathname(), "/torvalds/linux");
/// assert_eq!(url.hash(), "#top");
/// assert_eq!(url.query(), "tab=readme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedUrl {
    hostname: String,
    pathname: String,
    hash: String,
    query: String,
}

impl ParsedUrl {
    /// Parse an absolute URL string.
    pub fn parse(input: &str) -> Result<Self, LinkError> {
        let url = Url::parse(input.trim())?;
        Ok(Self::from(&url))
    }

    /// Build a value from raw parts, mostly useful in tests and when the
    /// caller already holds a decomposed URL from elsewhere.
    pub fn from_parts(hostname: &str, pathname: &str, hash: &str) -> Self {
        Self {
            hostname: hostname.to_ascii_lowercase(),
            pathname: pathname.to_string(),
            hash: hash.to_string(),
            query: String::new(),
        }
    }

    /// Attach a query string (without the leading `?`).
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.trim_start_matches('?').to_string();
        self
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

impl From<&Url> for ParsedUrl {
    fn from(url: &Url) -> Self {
        let hash = match url.fragment() {
            Some(fragment) if !fragment.is_empty() => format!("#{}", fragment),
            _ => String::new(),
        };

        Self {
            hostname: url.host_str().unwrap_or_default().to_string(),
            pathname: url.path().to_string(),
            hash,
            query: url.query().unwrap_or_default().to_string(),
        }
    }
}

impl From<Url> for ParsedUrl {
    fn from(url: Url) -> Self {
        Self::from(&url)
    }
}

impl std::str::FromStr for ParsedUrl {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_complete() {
        let url = ParsedUrl::parse("https://music.163.com/#/song?id=1901371647").unwrap();

        assert_eq!(url.hostname(), "music.163.com");
        assert_eq!(url.pathname(), "/");
        assert_eq!(url.hash(), "#/song?id=1901371647");
        assert_eq!(url.query(), "");
    }

    #[test]
    fn test_parse_minimal() {
        let url = ParsedUrl::parse("https://github.com").unwrap();

        assert_eq!(url.hostname(), "github.com");
        assert_eq!(url.pathname(), "/");
        assert_eq!(url.hash(), "");
    }

    #[test]
    fn test_port_is_not_part_of_hostname() {
        let url = ParsedUrl::parse("http://localhost:2323/notes/1").unwrap();
        assert_eq!(url.hostname(), "localhost");
        assert_eq!(url.pathname(), "/notes/1");
    }

    #[test]
    fn test_empty_fragment_is_empty_hash() {
        let url = ParsedUrl::parse("https://example.com/a#").unwrap();
        assert_eq!(url.hash(), "");
    }

    #[test]
    fn test_invalid_url() {
        let result = ParsedUrl::parse("github.com/torvalds/linux");
        assert!(matches!(result, Err(LinkError::InvalidUrl(_))));

        assert!(ParsedUrl::parse("").is_err());
    }

    #[test]
    fn test_non_hierarchical_url_has_no_host() {
        let url = ParsedUrl::parse("mailto:someone@example.com").unwrap();
        assert_eq!(url.hostname(), "");
        assert_eq!(url.pathname(), "someone@example.com");
    }

    #[test]
    fn test_from_parts() {
        let url = ParsedUrl::from_parts("WWW.YouTube.com", "/watch", "").with_query("?v=abc");
        assert_eq!(url.hostname(), "www.youtube.com");
        assert_eq!(url.query(), "v=abc");
    }
}
