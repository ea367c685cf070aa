/// One discovered URL and its links
///
/// The outbound list is `None` while the page is pending, i.e. discovered
/// but not yet crawled (or never crawled because the budget ran out).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    url: String,
    outbound: Option<Vec<String>>,
    inbound: u32,
}

impl Page {
    pub(crate) fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            outbound: None,
            inbound: 0,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Outbound edges, or `None` while pending
    pub fn outbound(&self) -> Option<&[String]> {
        self.outbound.as_deref()
    }

    pub fn out_degree(&self) -> usize {
        self.outbound.as_ref().map_or(0, Vec::len)
    }

    /// Number of pages (plus the seeding reference) pointing here
    pub fn inbound(&self) -> u32 {
        self.inbound
    }

    pub fn is_pending(&self) -> bool {
        self.outbound.is_none()
    }

    /// A completed page with no outbound edges
    pub fn is_dangling(&self) -> bool {
        self.out_degree() == 0
    }

    pub(crate) fn replace_outbound(&mut self, links: Vec<String>) -> Option<Vec<String>> {
        self.outbound.replace(links)
    }

    pub(crate) fn add_inbound(&mut self) {
        self.inbound += 1;
    }

    pub(crate) fn remove_inbound(&mut self) {
        self.inbound = self.inbound.saturating_sub(1);
    }
}
