//! # State Licensing Rule Table
//!
//! One row per supported jurisdiction: FL, CA, SC, MD, NJ. Immutable,
//! hand-curated reference data transcribed from each board's published
//! requirements; never fetched externally.

use serde::Serialize;

/// Published licensing rules for one state medical board.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StateLicensingRule {
    /// Full state name.
    pub state: &'static str,
    /// Two-letter state code.
    pub code: &'static str,
    /// The licensing board.
    pub board: &'static str,
    /// Renewal cadence, as the board describes it.
    pub renewal_period: &'static str,
    /// Free-text renewal month description; the generator keys off the
    /// month name it contains.
    pub renewal_month: &'static str,
    /// CME hours and mandated topics per biennium.
    pub cme_requirements: &'static str,
    /// The board's official site.
    pub website: &'static str,
    /// Additional one-time or cyclical obligations.
    pub notes: &'static str,
}

/// The supported jurisdictions, in presentation order.
pub const STATE_RULES: &[StateLicensingRule] = &[
    StateLicensingRule {
        state: "Florida",
        code: "FL",
        board: "Florida Board of Medicine",
        renewal_period: "Biennial (every 2 years)",
        renewal_month: "January 31 (odd years) or based on birth month",
        cme_requirements: "40 hours per biennium, including 2 hours medical errors, 2 hours laws/rules, 2 hours controlled substances, 1 hour human trafficking",
        website: "https://flboardofmedicine.gov/",
        notes: "Must complete HIV/AIDS course once, Domestic Violence every third renewal cycle",
    },
    StateLicensingRule {
        state: "California",
        code: "CA",
        board: "Medical Board of California",
        renewal_period: "Biennial (every 2 years)",
        renewal_month: "Last day of birth month in odd or even years",
        cme_requirements: "50 hours per biennium, including 12 hours geriatric medicine (one-time for new licenses)",
        website: "https://www.mbc.ca.gov/",
        notes: "No CME reporting required but must maintain records for 4 years",
    },
    StateLicensingRule {
        state: "South Carolina",
        code: "SC",
        board: "South Carolina Board of Medical Examiners",
        renewal_period: "Biennial (every 2 years)",
        renewal_month: "April 30 (even years)",
        cme_requirements: "40 hours per biennium, including 4 hours controlled substances, 2 hours opioid prescribing",
        website: "https://llr.sc.gov/med/",
        notes: "Must complete ethics course every other renewal",
    },
    StateLicensingRule {
        state: "Maryland",
        code: "MD",
        board: "Maryland Board of Physicians",
        renewal_period: "Biennial (every 2 years)",
        renewal_month: "September 30 (based on license issue date)",
        cme_requirements: "50 hours per biennium, including 2 hours controlled substances (every 5 years)",
        website: "https://www.mbp.state.md.us/",
        notes: "Must maintain patient records for 5 years after last treatment",
    },
    StateLicensingRule {
        state: "New Jersey",
        code: "NJ",
        board: "New Jersey State Board of Medical Examiners",
        renewal_period: "Biennial (every 2 years)",
        renewal_month: "July 31 (based on triennial cycle)",
        cme_requirements: "100 hours per biennial period, including 20 hours Category 1",
        website: "https://www.njconsumeraffairs.gov/med/",
        notes: "Opioid prescribing course required, DEA licensees need additional DEA renewal",
    },
];

/// Look up a rule by two-letter state code.
pub fn state_rule(code: &str) -> Option<&'static StateLicensingRule> {
    STATE_RULES.iter().find(|rule| rule.code == code)
}
