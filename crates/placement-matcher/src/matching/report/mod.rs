mod listing;
mod summary;
pub mod views;

pub use listing::{
    filter_by_language, filter_by_specialization, list_candidates, list_destinations,
    list_eligible_pairs,
};
pub use summary::{candidate_probability, statistics_summary};
