//! Prelude module for the altcal crate.
//!
//! Re-exports the derive macros from derive_more and the chrono types used
//! for weekday/month configuration.

#[allow(unused_imports)]
pub use chrono::{Month as IsoMonth, Weekday};
#[allow(unused_imports)]
pub use derive_more::Display;
