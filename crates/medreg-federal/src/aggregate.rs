//! # Healthcare Term Sweep
//!
//! The aggregation pipeline: a fixed sweep of healthcare-compliance search
//! terms, fanned out concurrently, folded back in term order into one
//! deduplicated deadline list.

use std::collections::HashSet;

use chrono::NaiveDate;
use futures::future::join_all;
use tracing::{debug, warn};

use medreg_core::{classify, Category, Deadline, DocumentKind, Source, TriagePolicy};

use crate::client::{SearchDocuments, SearchOptions};
use crate::types::FederalDocument;

/// The curated healthcare-compliance search terms, highest value first.
pub const HEALTHCARE_SEARCH_TERMS: [&str; 9] = [
    "HIPAA",
    "HITECH",
    "health information",
    "electronic health records",
    "interoperability",
    "patient privacy",
    "healthcare cybersecurity",
    "CMS final rule",
    "Medicare compliance",
];

/// How many terms are actually queried per sweep. Caps external call
/// volume; the list is ordered so the first five carry the signal.
pub const TERM_SEARCH_LIMIT: usize = 5;

/// Results requested per term search.
pub const SEARCH_PAGE_SIZE: u32 = 10;

/// Sweep the configured terms and return deduplicated, classified
/// deadlines, unsorted.
///
/// Term searches run concurrently but results are folded in term order,
/// so when two terms surface the same document number the earlier term
/// keeps it. A failed term is logged and skipped; if every term fails the
/// sweep yields an empty list, not an error.
pub async fn fetch_federal_deadlines<S>(client: &S) -> Vec<Deadline>
where
    S: SearchDocuments + ?Sized,
{
    let options = SearchOptions {
        per_page: SEARCH_PAGE_SIZE,
        ..SearchOptions::default()
    };

    let searches = HEALTHCARE_SEARCH_TERMS
        .iter()
        .take(TERM_SEARCH_LIMIT)
        .map(|term| {
            let options = &options;
            async move { (*term, client.search(term, options).await) }
        });
    let pages = join_all(searches).await;

    let mut seen: HashSet<String> = HashSet::new();
    let mut deadlines = Vec::new();

    for (term, result) in pages {
        match result {
            Ok(page) => {
                debug!(term, results = page.results.len(), "term search complete");
                for doc in page.results {
                    if !seen.insert(doc.document_number.clone()) {
                        continue;
                    }
                    if let Some(deadline) = document_to_deadline(doc) {
                        deadlines.push(deadline);
                    }
                }
            }
            Err(error) => {
                warn!(term, %error, "federal register term search failed; skipping");
            }
        }
    }

    deadlines
}

/// Convert one document into a deadline record, or drop it.
///
/// Drops documents that carry no actionable date (neither a comment-close
/// nor an effective date) or whose date is unparseable. That is a
/// filtering decision, not an error.
fn document_to_deadline(doc: FederalDocument) -> Option<Deadline> {
    let date_text = doc.comments_close_on.or(doc.effective_on)?;
    let date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d").ok()?;

    let abstract_text = doc.abstract_text.unwrap_or_default();
    let category = categorize(&doc.title, &abstract_text);
    let kind = DocumentKind::from_label(doc.doc_type.as_deref().unwrap_or(""));
    let agency = doc
        .agencies
        .first()
        .and_then(|a| a.name.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    Some(Deadline {
        id: doc.document_number.clone(),
        title: doc.title,
        description: abstract_text,
        date,
        category,
        source: Source::FederalRegister,
        source_url: doc.html_url,
        document_number: Some(doc.document_number),
        agency: Some(agency),
        state: None,
        triage: TriagePolicy::Federal { kind },
    })
}

/// Classify a document by keyword scan over title + abstract.
fn categorize(title: &str, abstract_text: &str) -> Category {
    classify(&format!("{title} {abstract_text}"))
}
