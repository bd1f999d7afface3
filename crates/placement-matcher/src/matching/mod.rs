mod context;
pub mod domain;
pub mod eligibility;
pub mod report;
pub mod roster;
pub mod statistics;

pub use context::MatchingContext;
pub use domain::{
    Candidate, CandidateId, Destination, DestinationId, IndexKind, MatchError, Vocabulary,
    ASSIGNMENT_DAYS,
};
pub use eligibility::EligibilityMatrix;
pub use roster::{generate_candidates, generate_destinations, DestinationRoster};
pub use statistics::{
    DestinationCoverage, MatchDistribution, MatchRatio, OverallStatistics,
};
