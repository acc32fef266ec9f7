//! Search Module
//!
//! Request decision logic sitting between the HTTP handler and the provider.

mod outcome;
mod service;

pub use outcome::SearchOutcome;
pub use service::{is_exact_match, LookupService};
