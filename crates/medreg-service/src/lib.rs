//! # medreg-service — The Deadline Read Path
//!
//! The single read path callers use to get the current compliance
//! calendar. On each read the service either serves its in-memory cache
//! (when younger than the freshness window) or runs a fetch cycle: the
//! Federal Register sweep and the licensing generator in parallel, merged
//! federal-first and stable-sorted by date.
//!
//! ## Failure Masking
//!
//! Failures are recovered as low in the stack as possible. A failed term
//! search degrades completeness inside the federal sweep; a failed fetch
//! cycle is masked here by serving the previous merge tagged stale. Only a
//! failure with no prior data to fall back on reaches the caller as an
//! error. Some data always beats no data.
//!
//! ## Cache Lifecycle
//!
//! `EMPTY → FRESH → STALE → FRESH → …` — one slot, overwritten on every
//! successful cycle, never invalidated except by age or process restart.
//! The slot is process-local: with a one-hour staleness tolerance over
//! slow-moving data, shared storage would buy nothing.

pub mod report;
pub mod service;
pub mod source;

pub use report::DeadlineReport;
pub use service::{DeadlineService, ServiceError, FRESHNESS_WINDOW_SECS};
pub use source::{DeadlineSource, FederalSource};
