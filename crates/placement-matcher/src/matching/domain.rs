use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type CandidateId = usize;
pub type DestinationId = usize;

/// Length of every field assignment, in days.
pub const ASSIGNMENT_DAYS: u32 = 60;

pub const STANDARD_LANGUAGES: [&str; 5] = ["English", "Spanish", "French", "Arabic", "Portuguese"];

pub const STANDARD_SPECIALIZATIONS: [&str; 5] = [
    "Neurology",
    "Geriatrics",
    "Pediatrics",
    "Radiology",
    "Rheumatology",
];

/// A generated graduate volunteering for a field assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub language: String,
    pub specialization: String,
}

impl Candidate {
    pub fn new(
        id: CandidateId,
        language: impl Into<String>,
        specialization: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: Self::default_name(id),
            language: language.into(),
            specialization: specialization.into(),
        }
    }

    /// Display names are one-based while ids stay zero-based.
    pub fn default_name(id: CandidateId) -> String {
        format!("Participant_{}", id + 1)
    }
}

/// A country requesting one language and one specialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub required_language: String,
    pub needed_specialization: String,
}

impl Destination {
    pub fn new(
        id: DestinationId,
        name: impl Into<String>,
        required_language: impl Into<String>,
        needed_specialization: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            required_language: required_language.into(),
            needed_specialization: needed_specialization.into(),
        }
    }

    pub fn accepts(&self, candidate: &Candidate) -> bool {
        candidate.language == self.required_language
            && candidate.specialization == self.needed_specialization
    }
}

/// Attribute sets candidates are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub languages: Vec<String>,
    pub specializations: Vec<String>,
}

impl Vocabulary {
    pub fn new<L, S>(languages: L, specializations: S) -> Result<Self, MatchError>
    where
        L: IntoIterator,
        L::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let languages: Vec<String> = languages.into_iter().map(Into::into).collect();
        let specializations: Vec<String> = specializations.into_iter().map(Into::into).collect();

        if languages.is_empty() {
            return Err(MatchError::precondition("language vocabulary is empty"));
        }
        if specializations.is_empty() {
            return Err(MatchError::precondition(
                "specialization vocabulary is empty",
            ));
        }

        Ok(Self {
            languages,
            specializations,
        })
    }

    pub fn standard() -> Self {
        Self {
            languages: STANDARD_LANGUAGES.iter().map(|s| s.to_string()).collect(),
            specializations: STANDARD_SPECIALIZATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexKind {
    Candidate,
    Destination,
}

impl IndexKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Destination => "destination",
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("{kind} id {index} is out of range (valid ids are 0..{len})")]
    InvalidIndex {
        kind: IndexKind,
        index: usize,
        len: usize,
    },
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),
}

impl MatchError {
    pub(crate) fn precondition(detail: impl Into<String>) -> Self {
        Self::PreconditionViolation(detail.into())
    }

    pub(crate) fn check_index(kind: IndexKind, index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::InvalidIndex { kind, index, len })
        }
    }

    pub fn is_invalid_index(&self) -> bool {
        matches!(self, Self::InvalidIndex { .. })
    }
}
