use crate::{UrlError, UrlResult};
use url::Url;

/// Parses a string as an absolute http(s) URL with a host
///
/// The input must already be in its final form: leading or trailing
/// whitespace is rejected rather than trimmed, because the validated string
/// itself becomes the page identity.
///
/// # Examples
///
/// ```
/// use ripple_rank::url::parse_absolute_url;
///
/// assert!(parse_absolute_url("https://example.com/page").is_ok());
/// assert!(parse_absolute_url("/page").is_err());
/// ```
pub fn parse_absolute_url(raw: &str) -> UrlResult<Url> {
    if raw.is_empty() || raw.trim() != raw {
        return Err(UrlError::Parse(format!("not a bare URL: {:?}", raw)));
    }

    let url = Url::parse(raw).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlError::MissingHost),
    }
}

/// Returns true if `raw` is a syntactically valid absolute http(s) URL
///
/// ```
/// use ripple_rank::is_valid_absolute_url;
///
/// assert!(is_valid_absolute_url("https://news.ycombinator.com"));
/// assert!(!is_valid_absolute_url("item?id=1"));
/// assert!(!is_valid_absolute_url(""));
/// ```
pub fn is_valid_absolute_url(raw: &str) -> bool {
    parse_absolute_url(raw).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(is_valid_absolute_url("https://example.com/"));
        assert!(is_valid_absolute_url("http://example.com/page?q=1#frag"));
        assert!(is_valid_absolute_url("http://127.0.0.1:8080/"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(!is_valid_absolute_url(""));
    }

    #[test]
    fn test_rejects_relative_links() {
        assert!(!is_valid_absolute_url("/about"));
        assert!(!is_valid_absolute_url("about.html"));
        assert!(!is_valid_absolute_url("#section"));
        assert!(!is_valid_absolute_url("//cdn.example.com/lib.js"));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(!is_valid_absolute_url("mailto:someone@example.com"));
        assert!(!is_valid_absolute_url("javascript:void(0)"));
        assert!(!is_valid_absolute_url("ftp://example.com/file"));
        assert!(matches!(
            parse_absolute_url("ftp://example.com/"),
            Err(UrlError::InvalidScheme(_))
        ));
    }

    #[test]
    fn test_rejects_surrounding_whitespace() {
        assert!(!is_valid_absolute_url(" https://example.com/"));
        assert!(!is_valid_absolute_url("https://example.com/\n"));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(!is_valid_absolute_url("https://"));
        assert!(!is_valid_absolute_url("https://exa mple.com/"));
    }
}
