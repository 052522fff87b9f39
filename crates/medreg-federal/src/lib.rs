//! # medreg-federal — Federal Register Aggregation
//!
//! Turns a fixed list of healthcare-compliance search terms into a
//! deduplicated list of classified [`medreg_core::Deadline`] records, by
//! querying the Federal Register's public document search API.
//!
//! ## Pipeline
//!
//! 1. Issue one search per configured term (first five of the list,
//!    concurrently) for rules, proposed rules, and notices.
//! 2. Extract each document's actionable date: the comment-close date if
//!    present, otherwise the effective date. Documents with neither are
//!    dropped — there is nothing to put on a calendar.
//! 3. Deduplicate across terms by document number; the earliest term in
//!    the configured order keeps the document.
//! 4. Classify into a compliance category by keyword scan over
//!    title + abstract.
//!
//! Per-term failures are logged and skipped; a total outage produces an
//! empty list, never an error. Output is unsorted — merging and ordering
//! belong to `medreg-service`.
//!
//! ## Crate Policy
//!
//! - The reqwest client lives behind the [`SearchDocuments`] trait so the
//!   pipeline is testable with canned responses.
//! - No "now" parameter anywhere: records carry a triage policy and are
//!   judged urgent or passed at read time, not at fetch time.

pub mod aggregate;
pub mod client;
pub mod types;

pub use aggregate::{
    fetch_federal_deadlines, HEALTHCARE_SEARCH_TERMS, SEARCH_PAGE_SIZE, TERM_SEARCH_LIMIT,
};
pub use client::{
    FederalError, FederalRegisterClient, SearchDocuments, SearchOptions, FEDERAL_REGISTER_API,
};
pub use types::{Agency, DocumentSearchResponse, FederalDocument};
