use url::Url;

/// Returns the origin of a URL: `scheme://host[:port]`
///
/// Default ports are omitted, so `https://example.com:443/` and
/// `https://example.com/` share an origin. This is the robots.txt cache key.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use ripple_rank::url::origin_of;
///
/// let url = Url::parse("https://example.com/path?q=1").unwrap();
/// assert_eq!(origin_of(&url), "https://example.com");
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(origin_of(&url), "http://127.0.0.1:8080");
/// ```
pub fn origin_of(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Returns the robots.txt location for the host serving `url`
pub fn robots_url(url: &Url) -> String {
    format!("{}/robots.txt", origin_of(url))
}
