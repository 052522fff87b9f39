//! # Deadline — The Central Entity
//!
//! A `Deadline` is one dated compliance obligation: a comment period
//! closing, a rule taking effect, a license coming up for renewal. Records
//! are aggregated from several sources into one list, so the model carries
//! enough provenance to filter and debug by origin.
//!
//! ## Derived Fields
//!
//! `priority` and `status` are functions of `(date, triage policy, now)`,
//! exposed as methods rather than stored fields. Records sit in a cache for
//! up to an hour; a stored status would freeze "urgent" and "passed" at
//! fetch time and drift from the date they describe. [`DeadlineView`] is
//! the wire shape, materialized at response time with both fields computed
//! against the evaluation instant.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MedregError;
use crate::triage::{days_until, TriagePolicy};

// ─── Enumerations ────────────────────────────────────────────────────

/// The compliance category a deadline belongs to.
///
/// Federal documents are classified by keyword scan (see [`crate::classify`]);
/// licensing deadlines are always [`Category::Licensing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// HIPAA privacy and security rules.
    Hipaa,
    /// CMS, Medicare, and Medicaid rules.
    Cms,
    /// Interoperability, TEFCA, and FHIR rules.
    Interoperability,
    /// State medical-license renewal and CME obligations.
    Licensing,
    /// Office of Inspector General actions.
    Oig,
    /// State-level regulations outside licensing.
    State,
    /// Anything that matched no classification rule.
    Other,
}

impl Category {
    /// Canonical snake_case label, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hipaa => "hipaa",
            Self::Cms => "cms",
            Self::Interoperability => "interoperability",
            Self::Licensing => "licensing",
            Self::Oig => "oig",
            Self::State => "state",
            Self::Other => "other",
        }
    }

    /// Human-readable label for terminal and UI output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hipaa => "HIPAA",
            Self::Cms => "CMS/Medicare",
            Self::Interoperability => "Interoperability",
            Self::Licensing => "Licensing/CME",
            Self::Oig => "OIG",
            Self::State => "State Regulations",
            Self::Other => "Other",
        }
    }

    /// All categories in canonical order.
    pub fn all() -> &'static [Category] {
        &[
            Self::Hipaa,
            Self::Cms,
            Self::Interoperability,
            Self::Licensing,
            Self::Oig,
            Self::State,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = MedregError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| MedregError::unknown("category", s))
    }
}

/// Where a deadline record came from.
///
/// Provenance, not shown prominently, but retained for filtering and
/// debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Fetched from the Federal Register document search API.
    FederalRegister,
    /// Fetched from a CMS feed.
    Cms,
    /// Synthesized from the state medical-board rule table.
    StateBoard,
    /// Entered by hand.
    Manual,
}

impl Source {
    /// Canonical snake_case label, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FederalRegister => "federal_register",
            Self::Cms => "cms",
            Self::StateBoard => "state_board",
            Self::Manual => "manual",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How loudly a deadline should be surfaced.
///
/// Variant order is most-urgent-first so that `Ord` sorts high priority
/// ahead of low.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Needs attention now.
    High,
    /// Worth planning for.
    Medium,
    /// On the horizon.
    Low,
}

impl Priority {
    /// Canonical snake_case label, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a deadline sits relative to the evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Comfortably in the future.
    Upcoming,
    /// Inside the urgency window for its source.
    Urgent,
    /// The date has gone by.
    Passed,
}

impl Status {
    /// Canonical snake_case label, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Urgent => "urgent",
            Self::Passed => "passed",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = MedregError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(Self::Upcoming),
            "urgent" => Ok(Self::Urgent),
            "passed" => Ok(Self::Passed),
            other => Err(MedregError::unknown("status", other)),
        }
    }
}

// ─── Deadline ────────────────────────────────────────────────────────

/// One dated compliance obligation.
///
/// `id` is stable across cache refreshes for a given source record:
/// federal documents are keyed by document number, licensing items by a
/// `{kind}-{state}-{year}` composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deadline {
    /// Unique within a result set, stable across refreshes.
    pub id: String,
    /// Headline shown to the user.
    pub title: String,
    /// Longer text: rule abstract or CME requirement summary.
    pub description: String,
    /// The compliance due date (no time component).
    pub date: NaiveDate,
    /// Compliance category.
    pub category: Category,
    /// Provenance.
    pub source: Source,
    /// Link to the authoritative page, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Federal Register document number, for federal records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
    /// Issuing agency, for federal records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
    /// Two-letter state code, for state-board records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Which urgency thresholds apply to this record.
    #[serde(flatten)]
    pub triage: TriagePolicy,
}

impl Deadline {
    /// Days remaining until this deadline at the instant `now`.
    pub fn days_until(&self, now: DateTime<Utc>) -> i64 {
        days_until(self.date, now)
    }

    /// Priority evaluated at the instant `now`.
    pub fn priority(&self, now: DateTime<Utc>) -> Priority {
        self.triage.priority(self.days_until(now))
    }

    /// Status evaluated at the instant `now`.
    pub fn status(&self, now: DateTime<Utc>) -> Status {
        self.triage.status(self.days_until(now))
    }

    /// Materialize the wire representation at the instant `now`.
    pub fn view(&self, now: DateTime<Utc>) -> DeadlineView {
        DeadlineView {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            date: self.date,
            category: self.category,
            source: self.source,
            source_url: self.source_url.clone(),
            document_number: self.document_number.clone(),
            agency: self.agency.clone(),
            state: self.state.clone(),
            priority: self.priority(now),
            status: self.status(now),
        }
    }
}

/// The wire shape of a deadline, with derived fields frozen at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadlineView {
    /// See [`Deadline::id`].
    pub id: String,
    /// See [`Deadline::title`].
    pub title: String,
    /// See [`Deadline::description`].
    pub description: String,
    /// See [`Deadline::date`].
    pub date: NaiveDate,
    /// See [`Deadline::category`].
    pub category: Category,
    /// See [`Deadline::source`].
    pub source: Source,
    /// See [`Deadline::source_url`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// See [`Deadline::document_number`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
    /// See [`Deadline::agency`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
    /// See [`Deadline::state`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Priority at the instant the view was rendered.
    pub priority: Priority,
    /// Status at the instant the view was rendered.
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::DocumentKind;
    use chrono::TimeZone;

    fn sample(date: NaiveDate) -> Deadline {
        Deadline {
            id: "2024-12345".into(),
            title: "Revisions to the HIPAA Security Rule".into(),
            description: "Proposed cybersecurity requirements.".into(),
            date,
            category: Category::Hipaa,
            source: Source::FederalRegister,
            source_url: Some("https://www.federalregister.gov/d/2024-12345".into()),
            document_number: Some("2024-12345".into()),
            agency: Some("Office for Civil Rights".into()),
            state: None,
            triage: TriagePolicy::Federal {
                kind: DocumentKind::ProposedRule,
            },
        }
    }

    #[test]
    fn status_tracks_the_clock() {
        let deadline = sample(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        let far = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let near = Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        assert_eq!(deadline.status(far), Status::Upcoming);
        assert_eq!(deadline.status(near), Status::Urgent);
        assert_eq!(deadline.status(after), Status::Passed);
    }

    #[test]
    fn proposed_rule_twenty_days_out_is_high_and_upcoming() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let deadline = sample(NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());
        assert_eq!(deadline.days_until(now), 20);
        assert_eq!(deadline.priority(now), Priority::High);
        assert_eq!(deadline.status(now), Status::Upcoming);
    }

    #[test]
    fn view_freezes_derived_fields() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let deadline = sample(NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());
        let view = deadline.view(now);
        assert_eq!(view.priority, Priority::High);
        assert_eq!(view.status, Status::Upcoming);
        assert_eq!(view.id, deadline.id);
        assert_eq!(view.date, deadline.date);
    }

    #[test]
    fn view_serializes_snake_case_and_skips_absent_fields() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let deadline = Deadline {
            state: Some("FL".into()),
            source_url: None,
            document_number: None,
            agency: None,
            source: Source::StateBoard,
            category: Category::Licensing,
            triage: TriagePolicy::Licensing,
            ..sample(NaiveDate::from_ymd_opt(2024, 7, 31).unwrap())
        };
        let json = serde_json::to_value(deadline.view(now)).unwrap();
        assert_eq!(json["category"], "licensing");
        assert_eq!(json["source"], "state_board");
        assert_eq!(json["state"], "FL");
        assert_eq!(json["date"], "2024-07-31");
        assert!(json.get("source_url").is_none());
        assert!(json.get("agency").is_none());
    }

    #[test]
    fn category_round_trips_through_labels() {
        for category in Category::all() {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, *category);
        }
        assert!("telehealth".parse::<Category>().is_err());
    }

    #[test]
    fn priority_orders_most_urgent_first() {
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
    }
}
