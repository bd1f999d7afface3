use super::super::domain::{Candidate, CandidateId, Destination, DestinationId};
use super::super::statistics::{MatchRatio, OverallStatistics};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateView {
    pub id: CandidateId,
    pub name: String,
    pub language: String,
    pub specialization: String,
}

impl From<&Candidate> for CandidateView {
    fn from(candidate: &Candidate) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name.clone(),
            language: candidate.language.clone(),
            specialization: candidate.specialization.clone(),
        }
    }
}

impl fmt::Display for CandidateView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Language: {} | Specialization: {}",
            self.id, self.name, self.language, self.specialization
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationView {
    pub id: DestinationId,
    pub country: String,
    pub required_language: String,
    pub needed_specialization: String,
}

impl From<&Destination> for DestinationView {
    fn from(destination: &Destination) -> Self {
        Self {
            id: destination.id,
            country: destination.name.clone(),
            required_language: destination.required_language.clone(),
            needed_specialization: destination.needed_specialization.clone(),
        }
    }
}

impl fmt::Display for DestinationView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Country: {} | Required language: {} | Needed specialization: {}",
            self.id, self.country, self.required_language, self.needed_specialization
        )
    }
}

/// Flat record so the listing can go straight to CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligiblePairView {
    pub candidate_id: CandidateId,
    pub candidate_name: String,
    pub language: String,
    pub specialization: String,
    pub destination_id: DestinationId,
    pub destination: String,
}

impl EligiblePairView {
    pub fn new(candidate: &Candidate, destination: &Destination) -> Self {
        Self {
            candidate_id: candidate.id,
            candidate_name: candidate.name.clone(),
            language: candidate.language.clone(),
            specialization: candidate.specialization.clone(),
            destination_id: destination.id,
            destination: destination.name.clone(),
        }
    }
}

impl fmt::Display for EligiblePairView {
    // Both attributes are equal on either side of a match.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})  -->  {} [{}, {}]",
            self.candidate_name,
            self.language,
            self.specialization,
            self.destination,
            self.language,
            self.specialization
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateProbabilityView {
    pub candidate: CandidateView,
    pub eligible_destinations: Vec<String>,
    pub probability: MatchRatio,
}

#[derive(Debug, Clone, Serialize)]
pub struct DestinationCoverageEntry {
    pub destination: DestinationView,
    pub eligible_candidates: usize,
    pub probability: MatchRatio,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatisticsSummary {
    pub overall: OverallStatistics,
    pub unmatched_candidates: usize,
    pub match_distribution: Vec<usize>,
    pub destination_coverage: Vec<DestinationCoverageEntry>,
}
