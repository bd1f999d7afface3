//! Eligibility matching between volunteer candidates and field destinations.
//!
//! A run generates a candidate cohort, builds the candidate × destination
//! eligibility matrix once, and then answers count and probability queries
//! against the resulting [`matching::MatchingContext`].

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
