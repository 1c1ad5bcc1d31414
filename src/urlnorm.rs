//! urlnorm - URL normalization and "internal" domain scoping.
//!
//! The crawl engine assumes `normalize(normalize(x)) == normalize(x)`; this
//! module's `normalize` is idempotent by construction (it only strips
//! fragments/default ports and canonicalizes an empty path, it never
//! re-derives anything from already-normalized state).

use url::Url;

/// Normalize a URL string: parse it, strip the fragment, drop an explicit
/// default port, and ensure a root path reads as `/`.
///
/// Returns `None` if `raw` does not parse as an absolute URL.
pub fn normalize(raw: &str) -> Option<String> {
    let mut url = Url::parse(raw).ok()?;

    url.set_fragment(None);

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if is_default_port {
        let _ = url.set_port(None);
    }

    if url.path().is_empty() {
        url.set_path("/");
    }

    Some(url.to_string())
}

/// Scopes a crawl to URLs sharing the seed's host. This generalizes the
/// original hard-coded "internal domain" prefix check to "same host as the
/// seed" so the crawler isn't tied to one fixed domain.
#[derive(Debug, Clone)]
pub struct Scope {
    host: String,
}

impl Scope {
    /// Build a scope from a normalized seed URL. Returns `None` if the
    /// seed has no host (e.g. a `data:` URL).
    pub fn from_seed(seed: &str) -> Option<Self> {
        let url = Url::parse(seed).ok()?;
        let host = url.host_str()?.to_string();
        Some(Scope { host })
    }

    /// True if `url` shares this scope's host.
    pub fn is_internal(&self, url: &str) -> bool {
        Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h == self.host))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_fragment_and_default_port() {
        assert_eq!(
            normalize("https://example.com:443/a/b#frag"),
            Some("https://example.com/a/b".to_string())
        );
    }

    #[test]
    fn empty_path_becomes_root() {
        assert_eq!(
            normalize("https://example.com"),
            Some("https://example.com/".to_string())
        );
    }

    #[test]
    fn idempotent() {
        let once = normalize("https://example.com:443/x/#y").unwrap();
        let twice = normalize(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn scope_rejects_other_hosts() {
        let scope = Scope::from_seed("https://example.com/").unwrap();
        assert!(scope.is_internal("https://example.com/a"));
        assert!(!scope.is_internal("https://other.com/a"));
    }

    #[test]
    fn bad_url_normalizes_to_none() {
        assert_eq!(normalize("not a url"), None);
    }
}
