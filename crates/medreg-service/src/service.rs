//! # Deadline Service — Cache and Merger
//!
//! Owns the one piece of shared mutable state in the stack: the cache slot
//! holding the last successful merge. The slot's mutex is held across a
//! refetch, so concurrent misses coalesce into a single upstream cycle
//! instead of racing duplicate sweeps.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use medreg_core::{Clock, Deadline};
use medreg_licensing::generate_licensing_deadlines;

use crate::report::DeadlineReport;
use crate::source::DeadlineSource;

/// Default freshness window: one hour.
pub const FRESHNESS_WINDOW_SECS: i64 = 60 * 60;

/// Errors surfaced to the read-path caller.
///
/// Only one thing can go wrong from the caller's point of view: a fetch
/// cycle failed and there was no previous merge to fall back on.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// First fetch cycle failed; the cache was still empty.
    #[error("no deadline data available: {0}")]
    Unavailable(#[source] anyhow::Error),
}

/// The last successful merge.
struct CacheSlot {
    deadlines: Vec<Deadline>,
    merged_at: DateTime<Utc>,
}

/// The read path: cache, fetch cycle, merge, stale fallback.
pub struct DeadlineService {
    federal: Arc<dyn DeadlineSource>,
    clock: Arc<dyn Clock>,
    freshness: Duration,
    cache: Mutex<Option<CacheSlot>>,
}

impl DeadlineService {
    /// Service over the given federal source and clock, with the default
    /// one-hour freshness window.
    pub fn new(federal: Arc<dyn DeadlineSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            federal,
            clock,
            freshness: Duration::seconds(FRESHNESS_WINDOW_SECS),
            cache: Mutex::new(None),
        }
    }

    /// Override the freshness window.
    pub fn with_freshness(mut self, window: Duration) -> Self {
        self.freshness = window;
        self
    }

    /// Get the current deadlines.
    ///
    /// Serves the cache when fresh; otherwise runs a fetch cycle and
    /// replaces it. A failed cycle falls back to the stale slot when one
    /// exists; with an empty cache the failure surfaces as
    /// [`ServiceError::Unavailable`].
    pub async fn current(&self) -> Result<DeadlineReport, ServiceError> {
        let now = self.clock.now();
        let mut slot = self.cache.lock().await;

        if let Some(entry) = slot.as_ref() {
            if now - entry.merged_at < self.freshness {
                debug!(
                    age_secs = (now - entry.merged_at).num_seconds(),
                    "serving fresh cache"
                );
                return Ok(render(entry, now, true, false, None));
            }
        }

        match self.fetch_cycle(now).await {
            Ok(deadlines) => {
                info!(count = deadlines.len(), "fetch cycle complete");
                let entry = CacheSlot {
                    deadlines,
                    merged_at: now,
                };
                let report = render(&entry, now, false, false, None);
                *slot = Some(entry);
                Ok(report)
            }
            Err(error) => match slot.as_ref() {
                Some(entry) => {
                    warn!(%error, "fetch cycle failed; serving stale cache");
                    Ok(render(
                        entry,
                        now,
                        true,
                        true,
                        Some("Failed to fetch fresh data, returning cached results".to_string()),
                    ))
                }
                None => {
                    warn!(%error, "fetch cycle failed with empty cache");
                    Err(ServiceError::Unavailable(error))
                }
            },
        }
    }

    /// One fetch cycle: federal sweep and licensing generator joined,
    /// concatenated federal-first, stable-sorted ascending by date.
    async fn fetch_cycle(&self, now: DateTime<Utc>) -> anyhow::Result<Vec<Deadline>> {
        let today = now.date_naive();
        let (federal, licensing) = tokio::join!(self.federal.fetch(), async {
            generate_licensing_deadlines(today)
        });

        let mut merged = federal?;
        merged.extend(licensing);
        // Stable sort: same-date entries keep insertion order, so federal
        // records land ahead of licensing ones on ties.
        merged.sort_by_key(|d| d.date);
        Ok(merged)
    }
}

/// Materialize a report from a cache slot at the read instant.
fn render(
    entry: &CacheSlot,
    now: DateTime<Utc>,
    cached: bool,
    stale: bool,
    error: Option<String>,
) -> DeadlineReport {
    DeadlineReport {
        deadlines: entry.deadlines.iter().map(|d| d.view(now)).collect(),
        cached,
        stale,
        last_updated: entry.merged_at,
        error,
    }
}
