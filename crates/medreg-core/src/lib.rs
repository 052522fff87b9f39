//! # medreg-core — Foundational Types for the medreg Stack
//!
//! This crate is the bedrock of the medreg workspace. It defines the central
//! `Deadline` model and the pure functions that every other crate builds on.
//! Every other crate in the workspace depends on `medreg-core`; it depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Derived fields are computed, never stored.** A `Deadline` carries its
//!    `date` and a `TriagePolicy`; `priority` and `status` are methods taking
//!    the evaluation instant. A stored status would silently go wrong the
//!    moment the clock crosses a threshold while the record sits in cache.
//!
//! 2. **Single `Category` enum.** One definition, exhaustive `match`
//!    everywhere. Adding a category forces every consumer to handle it.
//!
//! 3. **Classification as an ordered rule table.** Keyword precedence is a
//!    const slice evaluated top-to-bottom, not nested conditionals, so the
//!    precedence is visible and independently testable.
//!
//! 4. **Clock as a seam.** All "now"-dependent code takes a `Clock` (or an
//!    explicit instant) so tests control time without wall-clock waits.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `medreg-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and implement
//!   `Serialize`/`Deserialize` where they cross the wire.

pub mod classify;
pub mod clock;
pub mod deadline;
pub mod error;
pub mod filter;
pub mod triage;

// Re-export primary types for ergonomic imports.
pub use classify::{classify, KeywordRule, CLASSIFICATION_RULES};
pub use clock::{Clock, ManualClock, SystemClock};
pub use deadline::{Category, Deadline, DeadlineView, Priority, Source, Status};
pub use error::MedregError;
pub use filter::{sort_deadlines, DeadlineFilter, SortKey};
pub use triage::{days_until, days_until_label, DocumentKind, TriagePolicy};
