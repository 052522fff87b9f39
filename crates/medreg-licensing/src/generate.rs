//! # Licensing Deadline Generator
//!
//! Derives the next license-renewal and CME-completion deadline per state
//! from the static rule table. Two records per state: the renewal itself,
//! and a CME checkpoint 30 days earlier.
//!
//! ## Biennial Parity
//!
//! Every supported board renews on a two-year cycle, but not the same one:
//! South Carolina renews in even years, the other four in odd years. The
//! parity branch below encodes that real-world cadence and must stay a
//! per-state lookup, not a shared formula.

use chrono::{Datelike, Duration, NaiveDate};

use medreg_core::{Category, Deadline, Source, TriagePolicy};

use crate::rules::{StateLicensingRule, STATE_RULES};

/// The renewal year for a state, given the current calendar year.
///
/// South Carolina renews in even years; FL, CA, MD, and NJ in odd years.
/// If the current year is not the state's renewal year, the next year is.
pub fn renewal_year(code: &str, current_year: i32) -> i32 {
    let even_year = current_year % 2 == 0;
    let renews_even = code == "SC";
    if even_year == renews_even {
        current_year
    } else {
        current_year + 1
    }
}

/// Month and day-of-month for a rule's renewal date, keyed off the month
/// name in its free-text `renewal_month` field. Boards whose text names no
/// month (California's birth-month scheme) default to June 30.
fn renewal_month_day(rule: &StateLicensingRule) -> (u32, u32) {
    let text = rule.renewal_month;
    if text.contains("January") {
        (1, 31)
    } else if text.contains("April") {
        (4, 30)
    } else if text.contains("September") {
        (9, 30)
    } else if text.contains("July") {
        (7, 31)
    } else {
        (6, 30)
    }
}

/// Generate the licensing and CME deadlines for every supported state.
///
/// Pure function of `today` and the rule table: same input, same output,
/// no I/O. Identifiers are stable across runs (`license-{code}-{year}`,
/// `cme-{code}-{year}`), so a regenerated set lines up with a cached one.
pub fn generate_licensing_deadlines(today: NaiveDate) -> Vec<Deadline> {
    let mut deadlines = Vec::with_capacity(STATE_RULES.len() * 2);

    for rule in STATE_RULES {
        let year = renewal_year(rule.code, today.year());
        let (month, day) = renewal_month_day(rule);
        let renewal_date = NaiveDate::from_ymd_opt(year, month, day)
            .expect("rule table renewal dates are valid in every year");

        deadlines.push(Deadline {
            id: format!("license-{}-{}", rule.code, year),
            title: format!("{} Medical License Renewal", rule.state),
            description: format!(
                "{} license renewal deadline. CME Requirements: {}",
                rule.board, rule.cme_requirements
            ),
            date: renewal_date,
            category: Category::Licensing,
            source: Source::StateBoard,
            source_url: Some(rule.website.to_string()),
            document_number: None,
            agency: None,
            state: Some(rule.code.to_string()),
            triage: TriagePolicy::Licensing,
        });

        let cme_date = renewal_date - Duration::days(30);
        deadlines.push(Deadline {
            id: format!("cme-{}-{}", rule.code, year),
            title: format!("{} CME Completion Deadline", rule.state),
            description: format!(
                "Complete CME requirements before license renewal. {}",
                rule.cme_requirements
            ),
            date: cme_date,
            category: Category::Licensing,
            source: Source::StateBoard,
            source_url: Some(rule.website.to_string()),
            document_number: None,
            agency: None,
            state: Some(rule.code.to_string()),
            triage: TriagePolicy::Licensing,
        });
    }

    deadlines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use medreg_core::{Priority, Status};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parity_even_year() {
        // 2024 is even: SC renews now, everyone else next year.
        assert_eq!(renewal_year("SC", 2024), 2024);
        assert_eq!(renewal_year("FL", 2024), 2025);
        assert_eq!(renewal_year("CA", 2024), 2025);
        assert_eq!(renewal_year("MD", 2024), 2025);
        assert_eq!(renewal_year("NJ", 2024), 2025);
    }

    #[test]
    fn parity_odd_year() {
        assert_eq!(renewal_year("SC", 2023), 2024);
        assert_eq!(renewal_year("FL", 2023), 2023);
        assert_eq!(renewal_year("NJ", 2023), 2023);
    }

    #[test]
    fn south_carolina_march_2024_scenario() {
        let deadlines = generate_licensing_deadlines(day(2024, 3, 1));

        let license = deadlines
            .iter()
            .find(|d| d.id == "license-SC-2024")
            .expect("SC renewal present");
        assert_eq!(license.date, day(2024, 4, 30));
        assert_eq!(license.title, "South Carolina Medical License Renewal");

        let cme = deadlines
            .iter()
            .find(|d| d.id == "cme-SC-2024")
            .expect("SC CME present");
        assert_eq!(cme.date, day(2024, 3, 31));
    }

    #[test]
    fn two_records_per_state() {
        let deadlines = generate_licensing_deadlines(day(2024, 3, 1));
        assert_eq!(deadlines.len(), 10);
        for rule in STATE_RULES {
            assert_eq!(
                deadlines
                    .iter()
                    .filter(|d| d.state.as_deref() == Some(rule.code))
                    .count(),
                2
            );
        }
    }

    #[test]
    fn renewal_dates_follow_month_keywords() {
        let deadlines = generate_licensing_deadlines(day(2023, 1, 1));
        let date_of = |id: &str| deadlines.iter().find(|d| d.id == id).unwrap().date;

        assert_eq!(date_of("license-FL-2023"), day(2023, 1, 31));
        // California's text names no month, so it defaults to June 30.
        assert_eq!(date_of("license-CA-2023"), day(2023, 6, 30));
        assert_eq!(date_of("license-MD-2023"), day(2023, 9, 30));
        assert_eq!(date_of("license-NJ-2023"), day(2023, 7, 31));
        assert_eq!(date_of("license-SC-2024"), day(2024, 4, 30));
    }

    #[test]
    fn records_carry_licensing_provenance() {
        let deadlines = generate_licensing_deadlines(day(2024, 3, 1));
        for d in &deadlines {
            assert_eq!(d.category, Category::Licensing);
            assert_eq!(d.source, Source::StateBoard);
            assert_eq!(d.triage, TriagePolicy::Licensing);
            assert!(d.source_url.is_some());
            assert!(d.state.is_some());
            assert!(d.document_number.is_none());
        }
    }

    #[test]
    fn licensing_thresholds_apply_at_read_time() {
        let deadlines = generate_licensing_deadlines(day(2024, 3, 1));
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

        // SC CME on 2024-03-31 is 30 days out: urgent + high under the
        // licensing policy (a federal record would still be upcoming).
        let cme = deadlines.iter().find(|d| d.id == "cme-SC-2024").unwrap();
        assert_eq!(cme.status(now), Status::Urgent);
        assert_eq!(cme.priority(now), Priority::High);

        // SC renewal on 2024-04-30 is 60 days out: upcoming + medium.
        let license = deadlines.iter().find(|d| d.id == "license-SC-2024").unwrap();
        assert_eq!(license.status(now), Status::Upcoming);
        assert_eq!(license.priority(now), Priority::Medium);
    }

    #[test]
    fn deterministic_given_today() {
        let a = generate_licensing_deadlines(day(2024, 3, 1));
        let b = generate_licensing_deadlines(day(2024, 3, 1));
        assert_eq!(a, b);
    }
}
