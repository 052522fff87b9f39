//! # Route Modules
//!
//! Each module defines the handlers for one API surface area; the router
//! is assembled in the crate root.

pub mod deadlines;
pub mod health;
