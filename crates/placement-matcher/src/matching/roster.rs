use super::domain::{Candidate, Destination, MatchError};
use rand::Rng;
use tracing::debug;

/// Fixed set of countries requesting volunteers.
#[derive(Debug, Clone)]
pub struct DestinationRoster {
    destinations: Vec<Destination>,
}

impl DestinationRoster {
    pub fn standard() -> Self {
        Self {
            destinations: standard_destinations(),
        }
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn requiring_language(&self, language: &str) -> Vec<&Destination> {
        self.destinations
            .iter()
            .filter(|destination| destination.required_language == language)
            .collect()
    }

    pub fn into_destinations(self) -> Vec<Destination> {
        self.destinations
    }
}

pub fn generate_destinations() -> Vec<Destination> {
    DestinationRoster::standard().into_destinations()
}

fn standard_destinations() -> Vec<Destination> {
    [
        ("Kenya", "English", "Pediatrics"),
        ("Peru", "Spanish", "Geriatrics"),
        ("France", "French", "Neurology"),
        ("Morocco", "Arabic", "Radiology"),
        ("Mozambique", "Portuguese", "Rheumatology"),
        ("Canada", "English", "Neurology"),
        ("Mexico", "Spanish", "Pediatrics"),
        ("Lebanon", "Arabic", "Geriatrics"),
        ("Brazil", "Portuguese", "Radiology"),
        ("Belgium", "French", "Rheumatology"),
    ]
    .into_iter()
    .enumerate()
    .map(|(id, (name, language, specialization))| {
        Destination::new(id, name, language, specialization)
    })
    .collect()
}

/// Draws `count` candidates with sequential ids, picking a language and then a
/// specialization uniformly for each one.
pub fn generate_candidates<R, S>(
    count: usize,
    languages: &[S],
    specializations: &[S],
    rng: &mut R,
) -> Result<Vec<Candidate>, MatchError>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    if count == 0 {
        return Err(MatchError::precondition("candidate count must be positive"));
    }
    if languages.is_empty() {
        return Err(MatchError::precondition("language vocabulary is empty"));
    }
    if specializations.is_empty() {
        return Err(MatchError::precondition(
            "specialization vocabulary is empty",
        ));
    }

    let candidates: Vec<Candidate> = (0..count)
        .map(|id| {
            let language: &str = languages[rng.gen_range(0..languages.len())].as_ref();
            let specialization: &str =
                specializations[rng.gen_range(0..specializations.len())].as_ref();
            Candidate::new(id, language, specialization)
        })
        .collect();

    debug!(count = candidates.len(), "generated candidate cohort");
    Ok(candidates)
}
