use super::domain::{
    Candidate, CandidateId, Destination, DestinationId, IndexKind, MatchError, Vocabulary,
};
use super::eligibility::EligibilityMatrix;
use super::roster::{generate_candidates, DestinationRoster};
use super::statistics::{
    self, DestinationCoverage, MatchDistribution, MatchRatio, OverallStatistics,
};
use crate::config::GenerationConfig;
use rand::Rng;
use tracing::info;

/// Candidates, destinations and their eligibility relation, fixed at setup.
#[derive(Debug, Clone)]
pub struct MatchingContext {
    candidates: Vec<Candidate>,
    destinations: Vec<Destination>,
    relation: EligibilityMatrix,
}

impl MatchingContext {
    /// Generates a cohort against the standard destination roster. The seed in
    /// `generation` is not consulted; the caller seeds `rng`.
    pub fn generate<R>(
        generation: &GenerationConfig,
        vocabulary: &Vocabulary,
        rng: &mut R,
    ) -> Result<Self, MatchError>
    where
        R: Rng + ?Sized,
    {
        let destinations = DestinationRoster::standard().into_destinations();
        let candidates = generate_candidates(
            generation.candidate_count,
            &vocabulary.languages,
            &vocabulary.specializations,
            rng,
        )?;

        let context = Self::from_parts(candidates, destinations)?;
        info!(
            candidates = context.candidates.len(),
            destinations = context.destinations.len(),
            eligible_pairs = context.relation.count_eligible(),
            "matching context ready"
        );
        Ok(context)
    }

    /// Builds a context from caller-provided records whose ids must equal
    /// their positions.
    pub fn from_parts(
        candidates: Vec<Candidate>,
        destinations: Vec<Destination>,
    ) -> Result<Self, MatchError> {
        if let Some((position, candidate)) = candidates
            .iter()
            .enumerate()
            .find(|(position, candidate)| candidate.id != *position)
        {
            return Err(MatchError::precondition(format!(
                "candidate at position {position} has id {}",
                candidate.id
            )));
        }
        if let Some((position, destination)) = destinations
            .iter()
            .enumerate()
            .find(|(position, destination)| destination.id != *position)
        {
            return Err(MatchError::precondition(format!(
                "destination at position {position} has id {}",
                destination.id
            )));
        }

        let relation = EligibilityMatrix::build(&candidates, &destinations);
        Ok(Self {
            candidates,
            destinations,
            relation,
        })
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn relation(&self) -> &EligibilityMatrix {
        &self.relation
    }

    pub fn candidate(&self, id: CandidateId) -> Result<&Candidate, MatchError> {
        self.candidates.get(id).ok_or(MatchError::InvalidIndex {
            kind: IndexKind::Candidate,
            index: id,
            len: self.candidates.len(),
        })
    }

    pub fn destination(&self, id: DestinationId) -> Result<&Destination, MatchError> {
        self.destinations.get(id).ok_or(MatchError::InvalidIndex {
            kind: IndexKind::Destination,
            index: id,
            len: self.destinations.len(),
        })
    }

    pub fn is_eligible(
        &self,
        candidate: CandidateId,
        destination: DestinationId,
    ) -> Result<bool, MatchError> {
        self.relation.is_eligible(candidate, destination)
    }

    pub fn match_count_for(&self, candidate: CandidateId) -> Result<usize, MatchError> {
        statistics::match_count_for(&self.relation, candidate)
    }

    pub fn match_probability_for(&self, candidate: CandidateId) -> Result<MatchRatio, MatchError> {
        statistics::match_probability_for(&self.relation, candidate)
    }

    pub fn overall_statistics(&self) -> Result<OverallStatistics, MatchError> {
        statistics::overall_statistics(&self.relation)
    }

    pub fn destination_coverage(
        &self,
        destination: DestinationId,
    ) -> Result<DestinationCoverage, MatchError> {
        statistics::destination_coverage(&self.relation, destination)
    }

    pub fn match_distribution(&self) -> MatchDistribution {
        statistics::match_distribution(&self.relation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generate_builds_full_relation() {
        let mut rng = StdRng::seed_from_u64(2024);
        let generation = GenerationConfig {
            candidate_count: 100,
            seed: Some(2024),
        };
        let context = MatchingContext::generate(&generation, &Vocabulary::standard(), &mut rng)
            .expect("context generates");

        assert_eq!(context.candidates().len(), 100);
        assert_eq!(context.destinations().len(), 10);
        assert_eq!(context.relation().dimensions(), (100, 10));
    }

    #[test]
    fn from_parts_requires_positional_ids() {
        let candidates = vec![Candidate::new(1, "English", "Pediatrics")];
        let err = MatchingContext::from_parts(candidates, Vec::new()).unwrap_err();
        assert!(matches!(err, MatchError::PreconditionViolation(_)));

        let destinations = vec![Destination::new(3, "Kenya", "English", "Pediatrics")];
        let err = MatchingContext::from_parts(Vec::new(), destinations).unwrap_err();
        assert!(matches!(err, MatchError::PreconditionViolation(_)));
    }

    #[test]
    fn record_lookups_reject_unknown_ids() {
        let context = MatchingContext::from_parts(
            vec![Candidate::new(0, "English", "Pediatrics")],
            vec![Destination::new(0, "Kenya", "English", "Pediatrics")],
        )
        .expect("context builds");

        assert_eq!(context.candidate(0).expect("exists").name, "Participant_1");
        assert_eq!(context.destination(0).expect("exists").name, "Kenya");
        assert!(context.candidate(1).unwrap_err().is_invalid_index());
        assert!(context.destination(1).unwrap_err().is_invalid_index());
    }
}
