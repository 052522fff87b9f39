//! # Federal Register Wire Types
//!
//! Serde mappings for the `documents.json` search endpoint. Dates arrive
//! as `YYYY-MM-DD` strings or null; they are kept as strings here and
//! parsed in the aggregation step, so one malformed date drops one
//! document instead of failing the whole page.

use serde::Deserialize;

/// One page of search results.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentSearchResponse {
    /// Total matching documents across all pages.
    #[serde(default)]
    pub count: u64,
    /// Total pages at the requested page size.
    #[serde(default)]
    pub total_pages: u64,
    /// The documents on this page.
    #[serde(default)]
    pub results: Vec<FederalDocument>,
    /// URL of the next page, when one exists.
    #[serde(default)]
    pub next_page_url: Option<String>,
}

/// One Federal Register document, trimmed to the fields the pipeline reads.
#[derive(Debug, Clone, Deserialize)]
pub struct FederalDocument {
    /// The document's unique number; the dedup key and deadline id.
    pub document_number: String,
    /// Document title.
    pub title: String,
    /// Abstract, when the agency supplied one.
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
    /// Human-readable document type ("Rule", "Proposed Rule", "Notice").
    #[serde(rename = "type", default)]
    pub doc_type: Option<String>,
    /// Link to the document on federalregister.gov.
    #[serde(default)]
    pub html_url: Option<String>,
    /// Publication date, `YYYY-MM-DD`.
    #[serde(default)]
    pub publication_date: Option<String>,
    /// Comment-period close date, `YYYY-MM-DD`. Takes precedence as the
    /// actionable deadline.
    #[serde(default)]
    pub comments_close_on: Option<String>,
    /// Effective date, `YYYY-MM-DD`. The fallback deadline.
    #[serde(default)]
    pub effective_on: Option<String>,
    /// Issuing agencies, most significant first.
    #[serde(default)]
    pub agencies: Vec<Agency>,
}

/// An agency reference attached to a document.
#[derive(Debug, Clone, Deserialize)]
pub struct Agency {
    /// Agency display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Federal Register agency id.
    #[serde(default)]
    pub id: Option<u64>,
}
