//! Location and history model.
//!
//! `Location` mirrors the pieces of `window.location` / `history` the page
//! controller needs: the current path, the query string, in-place query
//! rewrites (history replacement, no navigation) and full navigations.
//! Query values are percent-encoded with `urlencoding` on the way out and
//! decoded on the way in.

/// Browser location: path plus ordered query parameters.
#[derive(Debug, Clone, Default)]
pub struct Location {
    path: String,
    params: Vec<(String, String)>,
    /// Full navigations recorded in order (navigation leaves the page,
    /// so the interesting artifact is the target URL itself)
    navigations: Vec<String>,
}

impl Location {
    /// Create a location from a path with no query string.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
            navigations: Vec::new(),
        }
    }

    /// Parse a location from a `path?query` URL reference.
    pub fn parse(url: &str) -> Self {
        let (path, query) = match url.split_once('?') {
            Some((path, query)) => (path, query),
            None => (url, ""),
        };
        Self {
            path: path.to_owned(),
            params: parse_query(query),
            navigations: Vec::new(),
        }
    }

    /// Current path component.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether this is the home page: the root path or its explicit
    /// index document.
    pub fn is_home(&self) -> bool {
        self.path == "/" || self.path.ends_with("/index.html")
    }

    /// Read a query parameter (decoded). First occurrence wins.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set a query parameter in place (history replacement, no navigation).
    pub fn replace_query_param(&mut self, name: &str, value: &str) {
        match self.params.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_owned(),
            None => self.params.push((name.to_owned(), value.to_owned())),
        }
    }

    /// Remove a query parameter in place (history replacement, no navigation).
    pub fn remove_query_param(&mut self, name: &str) {
        self.params.retain(|(key, _)| key != name);
    }

    /// Full navigation to a new URL. The location takes on the target's
    /// path and query, and the target is recorded for inspection.
    pub fn navigate(&mut self, url: &str) {
        let target = Self::parse(url);
        self.path = target.path;
        self.params = target.params;
        self.navigations.push(url.to_owned());
    }

    /// Targets of all full navigations performed so far, oldest first.
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    /// Current URL reference as `path?query` (query omitted when empty).
    pub fn href(&self) -> String {
        if self.params.is_empty() {
            return self.path.clone();
        }
        let query: Vec<String> = self
            .params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();
        format!("{}?{}", self.path, query.join("&"))
    }
}

/// Split a raw query string into decoded key/value pairs.
fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = urlencoding::decode(value)
                .map(std::borrow::Cow::into_owned)
                .unwrap_or_else(|_| value.to_owned());
            (key.to_owned(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_home_root() {
        assert!(Location::new("/").is_home());
    }

    #[test]
    fn test_is_home_index_html() {
        assert!(Location::new("/index.html").is_home());
        assert!(Location::new("/blog/index.html").is_home());
    }

    #[test]
    fn test_is_home_other_paths() {
        assert!(!Location::new("/blog/post-1").is_home());
        assert!(!Location::new("/about").is_home());
    }

    #[test]
    fn test_parse_with_query() {
        let loc = Location::parse("/?q=rust%20tips");
        assert_eq!(loc.path(), "/");
        assert_eq!(loc.query_param("q"), Some("rust tips"));
    }

    #[test]
    fn test_replace_and_remove_param() {
        let mut loc = Location::new("/");
        loc.replace_query_param("q", "rust");
        assert_eq!(loc.href(), "/?q=rust");
        loc.replace_query_param("q", "go");
        assert_eq!(loc.href(), "/?q=go");
        loc.remove_query_param("q");
        assert_eq!(loc.href(), "/");
    }

    #[test]
    fn test_href_encodes_values() {
        let mut loc = Location::new("/");
        loc.replace_query_param("q", "two words");
        assert_eq!(loc.href(), "/?q=two%20words");
    }

    #[test]
    fn test_navigate_records_target() {
        let mut loc = Location::new("/blog/post-1");
        loc.navigate("/?q=foo");
        assert_eq!(loc.path(), "/");
        assert_eq!(loc.query_param("q"), Some("foo"));
        assert_eq!(loc.navigations(), ["/?q=foo"]);
    }

    #[test]
    fn test_query_roundtrip() {
        let mut loc = Location::new("/");
        loc.replace_query_param("q", "café & more");
        let reparsed = Location::parse(&loc.href());
        assert_eq!(reparsed.query_param("q"), Some("café & more"));
    }
}
