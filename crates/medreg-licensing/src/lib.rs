//! # medreg-licensing — State Medical-Board Licensing Deadlines
//!
//! Synthesizes recurring license-renewal and CME-completion deadlines from
//! a hand-curated table of state medical-board rules. No network access:
//! the generator is a pure function of "today" and the static table, fully
//! deterministic and incapable of runtime failure.
//!
//! ## Known Approximation
//!
//! Real renewal dates vary by licensee (birth month, issue date, staggered
//! cycles). The generator collapses each state to one representative
//! renewal date per biennium, derived from the board's published renewal
//! month. It is a planning aid, not a legally authoritative calendar; the
//! table's `website` field points at the board that is.
//!
//! ## Crate Policy
//!
//! - Depends only on `medreg-core`.
//! - No I/O of any kind.

pub mod generate;
pub mod rules;

pub use generate::{generate_licensing_deadlines, renewal_year};
pub use rules::{state_rule, StateLicensingRule, STATE_RULES};
