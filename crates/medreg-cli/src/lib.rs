//! # medreg-cli — Terminal Front End
//!
//! A one-shot consumer of the deadline pipeline for operators and for
//! poking at the data without standing up the server. Each invocation
//! fetches fresh (a process-local cache has nothing to offer a process
//! that exits immediately), narrows with the core filter helpers, and
//! prints a table or JSON.
//!
//! ## Subcommands
//!
//! - `fetch` — sweep the Federal Register, generate licensing deadlines,
//!   merge, filter, and print.
//! - `states` — print the state licensing rule table.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to domain crates — no pipeline logic here.

pub mod fetch;
pub mod states;
