//! # Deadline Report
//!
//! The wire shape returned by the read path: the merged deadline list plus
//! cache metadata, so a caller can tell fresh data from a stale fallback.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use medreg_core::DeadlineView;

/// The result of one "get current deadlines" read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadlineReport {
    /// All deadlines, ascending by date, derived fields evaluated at the
    /// read instant.
    pub deadlines: Vec<DeadlineView>,
    /// Whether the list came from the cache rather than a fetch cycle.
    pub cached: bool,
    /// Set when the cache had aged out but a refetch failed and the old
    /// list was served anyway.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub stale: bool,
    /// When the served list was last successfully merged.
    pub last_updated: DateTime<Utc>,
    /// Note attached to a stale fallback describing the refetch failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
