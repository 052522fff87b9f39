//! # In-Memory Filtering and Sorting
//!
//! Downstream consumers receive the full merged deadline list in one
//! response; all narrowing happens client-side over that in-memory list.
//! These helpers implement the standard narrowing: category, state, status,
//! and free-text search, plus sorting by date or priority.

use chrono::{DateTime, Utc};

use crate::deadline::{Category, Deadline, Status};

/// A conjunction of narrowing criteria. Empty criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct DeadlineFilter {
    /// Keep only these categories (empty = all).
    pub categories: Vec<Category>,
    /// Keep only records tagged with these state codes (empty = all).
    /// Records with no state pass this criterion.
    pub states: Vec<String>,
    /// Keep only these statuses, evaluated at the filter instant (empty = all).
    pub statuses: Vec<Status>,
    /// Case-insensitive substring over title, description, and agency.
    pub search: Option<String>,
}

impl DeadlineFilter {
    /// Whether `deadline` satisfies every criterion at the instant `now`.
    pub fn matches(&self, deadline: &Deadline, now: DateTime<Utc>) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&deadline.category) {
            return false;
        }

        if !self.states.is_empty() {
            if let Some(state) = &deadline.state {
                if !self.states.iter().any(|s| s == state) {
                    return false;
                }
            }
        }

        if !self.statuses.is_empty() && !self.statuses.contains(&deadline.status(now)) {
            return false;
        }

        if let Some(needle) = &self.search {
            let needle = needle.to_lowercase();
            let in_title = deadline.title.to_lowercase().contains(&needle);
            let in_description = deadline.description.to_lowercase().contains(&needle);
            let in_agency = deadline
                .agency
                .as_deref()
                .is_some_and(|a| a.to_lowercase().contains(&needle));
            if !in_title && !in_description && !in_agency {
                return false;
            }
        }

        true
    }

    /// Apply the filter, keeping input order.
    pub fn apply<'a>(&self, deadlines: &'a [Deadline], now: DateTime<Utc>) -> Vec<&'a Deadline> {
        deadlines.iter().filter(|d| self.matches(d, now)).collect()
    }
}

/// Which axis to sort a deadline list along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending by due date.
    #[default]
    Date,
    /// Most urgent priority first (evaluated at the sort instant).
    Priority,
}

/// Sort in place along `key`. Both sorts are stable.
pub fn sort_deadlines(deadlines: &mut [Deadline], key: SortKey, now: DateTime<Utc>) {
    match key {
        SortKey::Date => deadlines.sort_by_key(|d| d.date),
        SortKey::Priority => deadlines.sort_by_key(|d| d.priority(now)),
    }
}
