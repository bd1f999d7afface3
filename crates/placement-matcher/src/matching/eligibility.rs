use super::domain::{Candidate, CandidateId, Destination, DestinationId, IndexKind, MatchError};
use serde::Serialize;
use tracing::debug;

/// Dense candidate × destination relation stored row-major.
///
/// Cell `(i, j)` lives at `i * destination_count + j` and is `true` exactly
/// when destination `j` accepts candidate `i`'s language and specialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityMatrix {
    candidates: usize,
    destinations: usize,
    cells: Vec<bool>,
}

impl EligibilityMatrix {
    pub fn build(candidates: &[Candidate], destinations: &[Destination]) -> Self {
        let cells: Vec<bool> = candidates
            .iter()
            .flat_map(|candidate| {
                destinations
                    .iter()
                    .map(move |destination| destination.accepts(candidate))
            })
            .collect();

        debug!(
            candidates = candidates.len(),
            destinations = destinations.len(),
            "built eligibility matrix"
        );

        Self {
            candidates: candidates.len(),
            destinations: destinations.len(),
            cells,
        }
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates
    }

    pub fn destination_count(&self) -> usize {
        self.destinations
    }

    /// `(rows, columns)`, i.e. candidates by destinations.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.candidates, self.destinations)
    }

    pub fn is_eligible(
        &self,
        candidate: CandidateId,
        destination: DestinationId,
    ) -> Result<bool, MatchError> {
        self.check_candidate(candidate)?;
        self.check_destination(destination)?;
        Ok(self.cells[candidate * self.destinations + destination])
    }

    pub fn row(&self, candidate: CandidateId) -> Result<&[bool], MatchError> {
        self.check_candidate(candidate)?;
        let start = candidate * self.destinations;
        Ok(&self.cells[start..start + self.destinations])
    }

    pub fn column(
        &self,
        destination: DestinationId,
    ) -> Result<impl Iterator<Item = bool> + '_, MatchError> {
        self.check_destination(destination)?;
        Ok(self
            .cells
            .iter()
            .skip(destination)
            .step_by(self.destinations)
            .copied())
    }

    /// True cells in row-major order.
    pub fn eligible_pairs(&self) -> impl Iterator<Item = (CandidateId, DestinationId)> + '_ {
        let width = self.destinations;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, eligible)| **eligible)
            .map(move |(offset, _)| (offset / width, offset % width))
    }

    pub fn count_eligible(&self) -> usize {
        self.cells.iter().filter(|eligible| **eligible).count()
    }

    pub(crate) fn check_candidate(&self, candidate: CandidateId) -> Result<(), MatchError> {
        MatchError::check_index(IndexKind::Candidate, candidate, self.candidates)
    }

    pub(crate) fn check_destination(&self, destination: DestinationId) -> Result<(), MatchError> {
        MatchError::check_index(IndexKind::Destination, destination, self.destinations)
    }
}
