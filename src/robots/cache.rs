//! Per-host robots.txt cache
//!
//! Each origin gets one slot, created on first lookup. The slot is a
//! `OnceCell`, so concurrent first-time lookups for the same origin all wait
//! on a single initialisation and the robots.txt file is fetched once for
//! the whole crawl.

use crate::robots::ParsedRobots;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};

/// Cached outcome of a robots.txt lookup for one host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotsRecord {
    /// robots.txt was fetched and parsed
    Available(ParsedRobots),

    /// robots.txt could not be fetched or parsed
    Unavailable,
}

/// What the cache currently knows about a host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotsStatus {
    /// No lookup has completed for this host
    Unknown,
    Available,
    Unavailable,
}

/// Origin-keyed robots.txt cache with at-most-once initialisation per key
#[derive(Debug, Default)]
pub struct RobotsCache {
    slots: Mutex<HashMap<String, Arc<OnceCell<RobotsRecord>>>>,
}

impl RobotsCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    async fn slot(&self, origin: &str) -> Arc<OnceCell<RobotsRecord>> {
        let mut slots = self.slots.lock().await;
        slots.entry(origin.to_string()).or_default().clone()
    }

    /// Returns the record for `origin`, running `init` if none exists yet
    ///
    /// Only the first caller for an origin runs `init`. Callers arriving
    /// while it is in flight wait for its result instead of starting their own.
    pub async fn get_or_init<F, Fut>(&self, origin: &str, init: F) -> RobotsRecord
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = RobotsRecord>,
    {
        let slot = self.slot(origin).await;
        slot.get_or_init(init).await.clone()
    }

    /// Reports the cache state for `origin` without triggering a fetch
    pub async fn status(&self, origin: &str) -> RobotsStatus {
        let slots = self.slots.lock().await;
        match slots.get(origin).and_then(|slot| slot.get()) {
            None => RobotsStatus::Unknown,
            Some(RobotsRecord::Available(_)) => RobotsStatus::Available,
            Some(RobotsRecord::Unavailable) => RobotsStatus::Unavailable,
        }
    }

    /// Number of hosts with a completed lookup
    pub async fn len(&self) -> usize {
        let slots = self.slots.lock().await;
        slots.values().filter(|slot| slot.initialized()).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
