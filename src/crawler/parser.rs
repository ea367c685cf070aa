//! HTML link extraction
//!
//! Hands back the raw `href` value of every `<a>` element in document order.
//! Duplicates, relative links and garbage are all kept; callers filter with
//! [`crate::url::is_valid_absolute_url`].

use scraper::{Html, Selector};

/// Returns the raw `href` attribute of every anchor in `body`, in order
///
/// # Example
///
/// ```
/// use ripple_rank::crawler::extract_hrefs;
///
/// let html = r#"<a href="https://a.example/">A</a><a href="/b">B</a>"#;
/// assert_eq!(extract_hrefs(html), vec!["https://a.example/", "/b"]);
/// ```
pub fn extract_hrefs(body: &str) -> Vec<String> {
    let document = Html::parse_document(body);

    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
