//! # Keyword Classification
//!
//! Assigns a [`Category`] to free regulatory text by scanning for known
//! keywords. The precedence is an ordered rule table evaluated
//! top-to-bottom, first match wins; text matching nothing falls through to
//! [`Category::Other`]. Classification is a pure function of the text:
//! idempotent, case-insensitive, and independent of which search term
//! surfaced the document.

use crate::deadline::Category;

/// One classification rule: if any keyword occurs in the text, assign the
/// category.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    /// Category assigned on a match.
    pub category: Category,
    /// Lowercase keywords, any of which triggers the rule.
    pub keywords: &'static [&'static str],
}

/// The classification precedence, highest first.
///
/// HIPAA outranks CMS: a CMS rule that amends the Privacy Rule is filed
/// under HIPAA, which is what a compliance officer expects.
pub const CLASSIFICATION_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: Category::Hipaa,
        keywords: &["hipaa", "health insurance portability"],
    },
    KeywordRule {
        category: Category::Cms,
        keywords: &["cms", "medicare", "medicaid"],
    },
    KeywordRule {
        category: Category::Interoperability,
        keywords: &["interoperability", "tefca", "fhir"],
    },
    KeywordRule {
        category: Category::Oig,
        keywords: &["oig", "inspector general"],
    },
];

/// Classify free text (typically title + abstract) into a category.
pub fn classify(text: &str) -> Category {
    let text = text.to_lowercase();
    CLASSIFICATION_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| text.contains(kw)))
        .map(|rule| rule.category)
        .unwrap_or(Category::Other)
}
