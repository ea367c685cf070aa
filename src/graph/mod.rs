//! In-memory link graph built during a crawl
//!
//! Pages are owned by a single URL-keyed map and edges are stored as URL
//! strings, so cyclic link structures need no shared ownership. Discovery
//! order is kept alongside the map: it drives deterministic iteration in
//! the rank phase and the tie-break of the final ranking.

mod page;

pub use page::Page;

use std::collections::HashMap;

/// Directed graph of discovered pages
#[derive(Debug, Clone, Default)]
pub struct LinkGraph {
    pages: HashMap<String, Page>,
    order: Vec<String>,
}

impl LinkGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pending page for `url` if it is not present yet
    ///
    /// Returns `true` if the page was created by this call.
    pub fn add_page(&mut self, url: &str) -> bool {
        if self.pages.contains_key(url) {
            return false;
        }
        self.pages.insert(url.to_string(), Page::new(url));
        self.order.push(url.to_string());
        true
    }

    /// Adds the crawl seed, which carries an inbound count of one
    pub fn add_seed(&mut self, url: &str) -> bool {
        let created = self.add_page(url);
        if let Some(page) = self.pages.get_mut(url) {
            page.add_inbound();
        }
        created
    }

    /// Sets the outbound edges of `url`, completing a pending page
    ///
    /// Targets that are not pages of the graph are dropped, as are repeated
    /// targets; the first occurrence keeps its position. Each kept target's
    /// inbound counter is incremented. Returns the number of edges recorded,
    /// or `None` if `url` itself is not in the graph.
    ///
    /// Setting the outbound list of an already completed page replaces it.
    pub fn set_outbound(&mut self, url: &str, links: &[String]) -> Option<usize> {
        if !self.pages.contains_key(url) {
            return None;
        }

        let mut kept: Vec<String> = Vec::with_capacity(links.len());
        for link in links {
            if self.pages.contains_key(link) && !kept.contains(link) {
                kept.push(link.clone());
            }
        }

        let previous = self
            .pages
            .get_mut(url)
            .and_then(|page| page.replace_outbound(kept.clone()));

        for old in previous.unwrap_or_default() {
            if let Some(target) = self.pages.get_mut(&old) {
                target.remove_inbound();
            }
        }
        for target in &kept {
            if let Some(page) = self.pages.get_mut(target) {
                page.add_inbound();
            }
        }

        Some(kept.len())
    }

    /// Page URLs in discovery order
    pub fn pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// Outbound edges of `url`; empty for pending and unknown pages
    pub fn outbound_of(&self, url: &str) -> &[String] {
        self.pages
            .get(url)
            .and_then(Page::outbound)
            .unwrap_or(&[])
    }

    /// Inbound reference count of `url`
    pub fn inbound_of(&self, url: &str) -> Option<u32> {
        self.pages.get(url).map(Page::inbound)
    }

    pub fn page(&self, url: &str) -> Option<&Page> {
        self.pages.get(url)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.pages.contains_key(url)
    }

    /// Returns true if `url` is known but its outbound list was never set
    pub fn is_pending(&self, url: &str) -> bool {
        self.pages.get(url).is_some_and(Page::is_pending)
    }

    /// Position of `url` in discovery order
    pub fn index_of(&self, url: &str) -> Option<usize> {
        self.order.iter().position(|u| u == url)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.pages.values().map(|p| p.out_degree()).sum()
    }
}
