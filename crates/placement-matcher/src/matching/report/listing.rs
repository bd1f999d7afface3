use super::super::domain::{Candidate, Destination, MatchError};
use super::super::eligibility::EligibilityMatrix;
use super::views::{CandidateView, DestinationView, EligiblePairView};

pub fn list_candidates(candidates: &[Candidate]) -> Vec<CandidateView> {
    candidates.iter().map(CandidateView::from).collect()
}

pub fn list_destinations(destinations: &[Destination]) -> Vec<DestinationView> {
    destinations.iter().map(DestinationView::from).collect()
}

pub fn filter_by_language(candidates: &[Candidate], language: &str) -> Vec<CandidateView> {
    candidates
        .iter()
        .filter(|candidate| candidate.language.eq_ignore_ascii_case(language))
        .map(CandidateView::from)
        .collect()
}

pub fn filter_by_specialization(
    candidates: &[Candidate],
    specialization: &str,
) -> Vec<CandidateView> {
    candidates
        .iter()
        .filter(|candidate| candidate.specialization.eq_ignore_ascii_case(specialization))
        .map(CandidateView::from)
        .collect()
}

/// Eligible pairs in row-major order. An empty result means no matches.
pub fn list_eligible_pairs(
    candidates: &[Candidate],
    destinations: &[Destination],
    relation: &EligibilityMatrix,
) -> Result<Vec<EligiblePairView>, MatchError> {
    if relation.dimensions() != (candidates.len(), destinations.len()) {
        return Err(MatchError::precondition(format!(
            "relation is {:?} but {} candidates and {} destinations were supplied",
            relation.dimensions(),
            candidates.len(),
            destinations.len()
        )));
    }

    Ok(relation
        .eligible_pairs()
        .map(|(candidate, destination)| {
            EligiblePairView::new(&candidates[candidate], &destinations[destination])
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Vec<Candidate>, Vec<Destination>) {
        (
            vec![
                Candidate::new(0, "Spanish", "Pediatrics"),
                Candidate::new(1, "English", "Pediatrics"),
                Candidate::new(2, "Spanish", "Geriatrics"),
            ],
            vec![
                Destination::new(0, "Kenya", "English", "Pediatrics"),
                Destination::new(1, "Peru", "Spanish", "Geriatrics"),
                Destination::new(2, "Mexico", "Spanish", "Pediatrics"),
            ],
        )
    }

    #[test]
    fn listings_preserve_input_order() {
        let (candidates, destinations) = fixture();

        let rows: Vec<String> = list_candidates(&candidates)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            rows[1],
            "ID: 1 | Name: Participant_2 | Language: English | Specialization: Pediatrics"
        );

        let rows: Vec<String> = list_destinations(&destinations)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            rows,
            vec![
                "ID: 0 | Country: Kenya | Required language: English | Needed specialization: Pediatrics",
                "ID: 1 | Country: Peru | Required language: Spanish | Needed specialization: Geriatrics",
                "ID: 2 | Country: Mexico | Required language: Spanish | Needed specialization: Pediatrics",
            ]
        );
    }

    #[test]
    fn pairs_are_row_major() {
        let (candidates, destinations) = fixture();
        let relation = EligibilityMatrix::build(&candidates, &destinations);

        let pairs = list_eligible_pairs(&candidates, &destinations, &relation)
            .expect("dimensions agree");
        let order: Vec<(usize, usize)> = pairs
            .iter()
            .map(|pair| (pair.candidate_id, pair.destination_id))
            .collect();
        assert_eq!(order, vec![(0, 2), (1, 0), (2, 1)]);
        assert_eq!(
            pairs[1].to_string(),
            "Participant_2 (English, Pediatrics)  -->  Kenya [English, Pediatrics]"
        );
    }

    #[test]
    fn no_matches_is_an_empty_listing() {
        let candidates = vec![Candidate::new(0, "Arabic", "Neurology")];
        let (_, destinations) = fixture();
        let relation = EligibilityMatrix::build(&candidates, &destinations);

        let pairs = list_eligible_pairs(&candidates, &destinations, &relation)
            .expect("dimensions agree");
        assert!(pairs.is_empty());
    }

    #[test]
    fn mismatched_relation_is_rejected() {
        let (candidates, destinations) = fixture();
        let relation = EligibilityMatrix::build(&candidates[..1], &destinations);

        assert!(matches!(
            list_eligible_pairs(&candidates, &destinations, &relation),
            Err(MatchError::PreconditionViolation(_))
        ));
    }

    #[test]
    fn filters_ignore_case() {
        let (candidates, _) = fixture();

        let spanish = filter_by_language(&candidates, "spanish");
        assert_eq!(spanish.len(), 2);
        assert!(spanish.iter().all(|view| view.language == "Spanish"));

        let pediatrics = filter_by_specialization(&candidates, "PEDIATRICS");
        let ids: Vec<usize> = pediatrics.iter().map(|view| view.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }
}
