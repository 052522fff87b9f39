//! # Triage — Day Counts and Urgency Policies
//!
//! The pure arithmetic behind `priority` and `status`: how many days remain
//! until a deadline, and how that count maps to urgency under each source's
//! policy.
//!
//! ## Two Deliberately Different Policies
//!
//! Federal-register deadlines use a 14-day urgency window with wider "high"
//! bands keyed to the document type (a proposed rule's comment period closes
//! hard; a final rule's effective date gives more runway). State-licensing
//! deadlines use a flat 30/90-day ladder, because a physician who has not
//! finished CME hours 30 days out is already in trouble. The two policies
//! encode real workflow differences per source and must not be unified.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::deadline::{Priority, Status};

/// Seconds in one civil day.
const DAY_SECS: i64 = 86_400;

/// Days remaining until `date`, counting from the instant `now`.
///
/// The deadline is taken as midnight UTC at the start of `date`, and the
/// elapsed span is rounded *up* to whole days. A deadline later today is
/// 1 day out until midnight passes; a deadline whose midnight is behind
/// `now` yields zero or a negative count.
pub fn days_until(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let target = date.and_time(NaiveTime::MIN).and_utc();
    let secs = (target - now).num_seconds();
    // Ceiling division (i64::div_ceil is unstable on this toolchain).
    secs.div_euclid(DAY_SECS) + i64::from(secs.rem_euclid(DAY_SECS) != 0)
}

/// Human label for a day count: "Today", "Tomorrow", "12 days", "3 days ago".
pub fn days_until_label(days: i64) -> String {
    match days {
        d if d < 0 => format!("{} days ago", -d),
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        d => format!("{d} days"),
    }
}

/// The Federal Register document type, as far as triage cares about it.
///
/// Only rules and proposed rules get type-specific priority bands; notices
/// and anything unrecognized fall through to the day-count thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// A final rule with a binding effective date.
    Rule,
    /// A proposed rule with an open comment period.
    ProposedRule,
    /// A notice (requests for information, meeting announcements).
    Notice,
    /// Any other document type.
    Other,
}

impl DocumentKind {
    /// Parse the Federal Register's human-readable `type` field.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Rule" => Self::Rule,
            "Proposed Rule" => Self::ProposedRule,
            "Notice" => Self::Notice,
            _ => Self::Other,
        }
    }
}

/// Which urgency thresholds apply to a deadline.
///
/// Stored on every [`crate::Deadline`] so that priority and status can be
/// recomputed at any read instant without consulting the record's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "policy")]
pub enum TriagePolicy {
    /// Federal-register thresholds: 14-day urgency, type-aware high bands.
    Federal {
        /// The document type driving the high-priority bands.
        kind: DocumentKind,
    },
    /// State-licensing thresholds: flat 30/90-day ladder, 30-day urgency.
    Licensing,
}

impl TriagePolicy {
    /// Map a day count to a priority under this policy.
    pub fn priority(&self, days: i64) -> Priority {
        match self {
            Self::Federal { kind } => {
                let type_window: Option<i64> = match kind {
                    DocumentKind::ProposedRule => Some(30),
                    DocumentKind::Rule => Some(60),
                    DocumentKind::Notice | DocumentKind::Other => None,
                };
                if matches!(type_window, Some(w) if days > 0 && days <= w) || days <= 14 {
                    Priority::High
                } else if days <= 60 {
                    Priority::Medium
                } else {
                    Priority::Low
                }
            }
            Self::Licensing => {
                if days <= 30 {
                    Priority::High
                } else if days <= 90 {
                    Priority::Medium
                } else {
                    Priority::Low
                }
            }
        }
    }

    /// Map a day count to a status under this policy.
    pub fn status(&self, days: i64) -> Status {
        let urgency_window = match self {
            Self::Federal { .. } => 14,
            Self::Licensing => 30,
        };
        if days < 0 {
            Status::Passed
        } else if days <= urgency_window {
            Status::Urgent
        } else {
            Status::Upcoming
        }
    }
}
