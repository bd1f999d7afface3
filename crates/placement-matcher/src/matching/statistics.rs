use super::domain::{CandidateId, DestinationId, MatchError};
use super::eligibility::EligibilityMatrix;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Exact `matches / total` ratio with a non-zero denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRatio {
    matches: usize,
    total: usize,
}

impl MatchRatio {
    pub fn new(matches: usize, total: usize) -> Result<Self, MatchError> {
        if total == 0 {
            return Err(MatchError::precondition(
                "probability denominator must be positive",
            ));
        }
        if matches > total {
            return Err(MatchError::precondition(format!(
                "match count {matches} exceeds total {total}"
            )));
        }
        Ok(Self { matches, total })
    }

    pub fn matches(&self) -> usize {
        self.matches
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn value(&self) -> f64 {
        self.matches as f64 / self.total as f64
    }
}

impl Serialize for MatchRatio {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("MatchRatio", 3)?;
        state.serialize_field("matches", &self.matches)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("value", &self.value())?;
        state.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallStatistics {
    pub total_pairs: usize,
    pub total_matches: usize,
    pub probability: MatchRatio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DestinationCoverage {
    pub destination_id: DestinationId,
    pub eligible_candidates: usize,
    pub probability: MatchRatio,
}

/// Number of candidates per match count; bucket `k` holds candidates that
/// qualify for exactly `k` destinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchDistribution {
    pub buckets: Vec<usize>,
}

impl MatchDistribution {
    pub fn candidates_with(&self, matches: usize) -> usize {
        self.buckets.get(matches).copied().unwrap_or(0)
    }

    pub fn unmatched(&self) -> usize {
        self.candidates_with(0)
    }

    pub fn matched(&self) -> usize {
        self.buckets.iter().skip(1).sum()
    }
}

pub fn match_count_for(
    relation: &EligibilityMatrix,
    candidate: CandidateId,
) -> Result<usize, MatchError> {
    let row = relation.row(candidate)?;
    Ok(row.iter().filter(|eligible| **eligible).count())
}

pub fn match_probability_for(
    relation: &EligibilityMatrix,
    candidate: CandidateId,
) -> Result<MatchRatio, MatchError> {
    let matches = match_count_for(relation, candidate)?;
    if relation.destination_count() == 0 {
        return Err(MatchError::precondition(
            "no destinations to compute a match probability against",
        ));
    }
    MatchRatio::new(matches, relation.destination_count())
}

pub fn overall_statistics(relation: &EligibilityMatrix) -> Result<OverallStatistics, MatchError> {
    let total_pairs = relation.candidate_count() * relation.destination_count();
    if total_pairs == 0 {
        return Err(MatchError::precondition(
            "overall statistics need at least one candidate and one destination",
        ));
    }
    let total_matches = relation.count_eligible();

    Ok(OverallStatistics {
        total_pairs,
        total_matches,
        probability: MatchRatio::new(total_matches, total_pairs)?,
    })
}

pub fn destination_coverage(
    relation: &EligibilityMatrix,
    destination: DestinationId,
) -> Result<DestinationCoverage, MatchError> {
    let eligible_candidates = relation
        .column(destination)?
        .filter(|eligible| *eligible)
        .count();
    if relation.candidate_count() == 0 {
        return Err(MatchError::precondition(
            "no candidates to compute destination coverage against",
        ));
    }

    Ok(DestinationCoverage {
        destination_id: destination,
        eligible_candidates,
        probability: MatchRatio::new(eligible_candidates, relation.candidate_count())?,
    })
}

pub fn match_distribution(relation: &EligibilityMatrix) -> MatchDistribution {
    let mut buckets = vec![0; relation.destination_count() + 1];
    for candidate in 0..relation.candidate_count() {
        if let Ok(count) = match_count_for(relation, candidate) {
            buckets[count] += 1;
        }
    }
    MatchDistribution { buckets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::domain::{Candidate, Destination, IndexKind};

    fn example_relation() -> EligibilityMatrix {
        let destinations = vec![
            Destination::new(0, "Kenya", "English", "Pediatrics"),
            Destination::new(1, "Peru", "Spanish", "Geriatrics"),
        ];
        let candidates = vec![
            Candidate::new(0, "English", "Pediatrics"),
            Candidate::new(1, "Spanish", "Pediatrics"),
        ];
        EligibilityMatrix::build(&candidates, &destinations)
    }

    #[test]
    fn per_candidate_counts_and_probabilities() {
        let relation = example_relation();

        assert_eq!(match_count_for(&relation, 0).expect("valid id"), 1);
        assert_eq!(match_count_for(&relation, 1).expect("valid id"), 0);

        let probability = match_probability_for(&relation, 0).expect("valid id");
        assert_eq!((probability.matches(), probability.total()), (1, 2));
        assert_eq!(probability.value(), 0.5);
    }

    #[test]
    fn overall_statistics_cover_every_pair() {
        let stats = overall_statistics(&example_relation()).expect("non-empty relation");

        assert_eq!(stats.total_pairs, 4);
        assert_eq!(stats.total_matches, 1);
        assert_eq!(stats.probability.value(), 0.25);
    }

    #[test]
    fn one_past_the_last_candidate_is_invalid() {
        let err = match_count_for(&example_relation(), 2).unwrap_err();
        assert_eq!(
            err,
            MatchError::InvalidIndex {
                kind: IndexKind::Candidate,
                index: 2,
                len: 2
            }
        );
        assert!(match_probability_for(&example_relation(), 2)
            .unwrap_err()
            .is_invalid_index());
    }

    #[test]
    fn zero_destinations_is_a_precondition_violation() {
        let candidates = vec![Candidate::new(0, "English", "Pediatrics")];
        let relation = EligibilityMatrix::build(&candidates, &[]);

        assert_eq!(match_count_for(&relation, 0).expect("valid id"), 0);
        assert!(matches!(
            match_probability_for(&relation, 0),
            Err(MatchError::PreconditionViolation(_))
        ));
        assert!(matches!(
            overall_statistics(&relation),
            Err(MatchError::PreconditionViolation(_))
        ));
    }

    #[test]
    fn ratio_rejects_impossible_values() {
        assert!(MatchRatio::new(1, 0).is_err());
        assert!(MatchRatio::new(3, 2).is_err());
        assert_eq!(MatchRatio::new(0, 5).expect("valid ratio").value(), 0.0);
    }

    #[test]
    fn ratio_serializes_with_its_value() {
        let json = serde_json::to_value(MatchRatio::new(1, 4).expect("valid ratio"))
            .expect("ratio serializes");
        assert_eq!(json["matches"], 1);
        assert_eq!(json["total"], 4);
        assert_eq!(json["value"], 0.25);
    }

    #[test]
    fn destination_coverage_counts_columns() {
        let relation = example_relation();

        let kenya = destination_coverage(&relation, 0).expect("valid id");
        assert_eq!(kenya.eligible_candidates, 1);
        assert_eq!(kenya.probability.value(), 0.5);

        let peru = destination_coverage(&relation, 1).expect("valid id");
        assert_eq!(peru.eligible_candidates, 0);

        assert!(destination_coverage(&relation, 2)
            .unwrap_err()
            .is_invalid_index());
    }

    #[test]
    fn distribution_buckets_candidates_by_match_count() {
        let distribution = match_distribution(&example_relation());

        assert_eq!(distribution.buckets, vec![1, 1, 0]);
        assert_eq!(distribution.unmatched(), 1);
        assert_eq!(distribution.matched(), 1);
        assert_eq!(distribution.candidates_with(5), 0);
    }
}
