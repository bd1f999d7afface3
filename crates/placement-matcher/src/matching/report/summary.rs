use super::super::context::MatchingContext;
use super::super::domain::{CandidateId, MatchError};
use super::views::{
    CandidateProbabilityView, CandidateView, DestinationCoverageEntry, DestinationView,
    StatisticsSummary,
};

pub fn candidate_probability(
    context: &MatchingContext,
    candidate_id: CandidateId,
) -> Result<CandidateProbabilityView, MatchError> {
    let candidate = context.candidate(candidate_id)?;
    let probability = context.match_probability_for(candidate_id)?;
    let row = context.relation().row(candidate_id)?;

    let eligible_destinations = context
        .destinations()
        .iter()
        .zip(row)
        .filter(|(_, eligible)| **eligible)
        .map(|(destination, _)| destination.name.clone())
        .collect();

    Ok(CandidateProbabilityView {
        candidate: CandidateView::from(candidate),
        eligible_destinations,
        probability,
    })
}

pub fn statistics_summary(context: &MatchingContext) -> Result<StatisticsSummary, MatchError> {
    let overall = context.overall_statistics()?;
    let distribution = context.match_distribution();

    let destination_coverage = context
        .destinations()
        .iter()
        .map(|destination| {
            let coverage = context.destination_coverage(destination.id)?;
            Ok(DestinationCoverageEntry {
                destination: DestinationView::from(destination),
                eligible_candidates: coverage.eligible_candidates,
                probability: coverage.probability,
            })
        })
        .collect::<Result<Vec<_>, MatchError>>()?;

    Ok(StatisticsSummary {
        overall,
        unmatched_candidates: distribution.unmatched(),
        match_distribution: distribution.buckets,
        destination_coverage,
    })
}
