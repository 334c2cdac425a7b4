use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize_specialty;
use crate::validation::FieldError;

/// Medical specialties accepted by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Specialty {
    #[default]
    Cardiologia,
    Pediatria,
    Dermatologia,
    Ginecologia,
    Neurologia,
    Oftalmologia,
    ClinicaGeral,
    Ortopedia,
}

impl Specialty {
    pub const ALL: [Specialty; 8] = [
        Specialty::Cardiologia,
        Specialty::Pediatria,
        Specialty::Dermatologia,
        Specialty::Ginecologia,
        Specialty::Neurologia,
        Specialty::Oftalmologia,
        Specialty::ClinicaGeral,
        Specialty::Ortopedia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Cardiologia => "CARDIOLOGIA",
            Specialty::Pediatria => "PEDIATRIA",
            Specialty::Dermatologia => "DERMATOLOGIA",
            Specialty::Ginecologia => "GINECOLOGIA",
            Specialty::Neurologia => "NEUROLOGIA",
            Specialty::Oftalmologia => "OFTALMOLOGIA",
            Specialty::ClinicaGeral => "CLINICA_GERAL",
            Specialty::Ortopedia => "ORTOPEDIA",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Specialty {
    type Err = FieldError;

    /// Accepts any spelling that normalizes to a known specialty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_specialty(s);
        Specialty::ALL
            .into_iter()
            .find(|specialty| specialty.as_str() == normalized)
            .ok_or(FieldError::UnknownSpecialty)
    }
}
