use crate::race::Race;
use crate::types::{BiopsyStatus, HyperplasiaStatus, MhtFormulation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Oldest plausible age at a relative's diagnosis.
const MAX_DIAGNOSIS_AGE: u32 = 120;

/// Questionnaire answers that fail basic consistency checks.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("age {0} must be a positive, finite number of years")]
    InvalidAge(f64),
    #[error("age at menarche {menarche} must be between 0 and the current age {age}")]
    MenarcheOutOfRange { menarche: u32, age: f64 },
    #[error("age at first child {first_child} must be between age at menarche and the current age {age}")]
    FirstBirthOutOfRange { first_child: u32, age: f64 },
    #[error("nulliparous (no children) but has value {0} for age at first child")]
    NulliparousWithFirstBirth(u32),
    #[error("if the number of biopsies is unknown, hyperplasia status must be unknown too")]
    HyperplasiaWithUnknownBiopsies,
    #[error("can't have a biopsy with atypical hyperplasia without a biopsy")]
    HyperplasiaWithoutBiopsy,
    #[error("relative's age at diagnosis {0} should be between 0 and 120")]
    InvalidDiagnosisAge(u32),
    #[error("give either a number of relatives or a family history, not both")]
    ConflictingFamilyHistory,
}

/// Breast cancer diagnoses among first-degree relatives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyHistory {
    /// `None` when the mother was never diagnosed.
    pub mother_age_at_diagnosis: Option<u32>,
    pub sisters_ages_at_diagnosis: Vec<u32>,
}

impl FamilyHistory {
    pub fn affected_relatives(&self) -> u32 {
        let mother = u32::from(self.mother_age_at_diagnosis.is_some());
        mother + self.sisters_ages_at_diagnosis.len() as u32
    }

    fn validate(&self) -> Result<(), InputError> {
        for &age in self
            .mother_age_at_diagnosis
            .iter()
            .chain(self.sisters_ages_at_diagnosis.iter())
        {
            if age == 0 || age >= MAX_DIAGNOSIS_AGE {
                return Err(InputError::InvalidDiagnosisAge(age));
            }
        }
        Ok(())
    }
}

/// Raw answers for one subject, before recoding.
///
/// Optional ages are `None` when the subject does not know them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskInput {
    pub age: f64,
    pub race: Race,
    pub biopsies: BiopsyStatus,
    #[serde(default = "unknown_hyperplasia")]
    pub hyperplasia: HyperplasiaStatus,
    #[serde(default)]
    pub age_at_menarche: Option<u32>,
    #[serde(default)]
    pub nulliparous: bool,
    #[serde(default)]
    pub age_at_first_child: Option<u32>,
    /// Number of affected first-degree relatives, when no detailed history is given.
    #[serde(default)]
    pub relatives: Option<u32>,
    #[serde(default)]
    pub family_history: Option<FamilyHistory>,
    #[serde(default)]
    pub mht: MhtFormulation,
}

fn unknown_hyperplasia() -> HyperplasiaStatus {
    HyperplasiaStatus::Unknown
}

impl RiskInput {
    /// Affected first-degree relatives, `None` when unknown.
    pub fn number_of_relatives(&self) -> Option<u32> {
        match &self.family_history {
            Some(history) => Some(history.affected_relatives()),
            None => self.relatives,
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        let age = self.age;
        if !age.is_finite() || age <= 0.0 {
            return Err(InputError::InvalidAge(age));
        }

        if let Some(menarche) = self.age_at_menarche {
            if menarche == 0 || f64::from(menarche) >= age {
                return Err(InputError::MenarcheOutOfRange { menarche, age });
            }
        }

        if let Some(first_child) = self.age_at_first_child {
            if self.nulliparous {
                return Err(InputError::NulliparousWithFirstBirth(first_child));
            }
            let lower = self.age_at_menarche.unwrap_or(0);
            if first_child <= lower || f64::from(first_child) >= age {
                return Err(InputError::FirstBirthOutOfRange { first_child, age });
            }
        }

        match (self.biopsies, self.hyperplasia) {
            (BiopsyStatus::Unknown, HyperplasiaStatus::None | HyperplasiaStatus::Atypical) => {
                return Err(InputError::HyperplasiaWithUnknownBiopsies);
            }
            (BiopsyStatus::None, HyperplasiaStatus::Atypical) => {
                return Err(InputError::HyperplasiaWithoutBiopsy);
            }
            _ => {}
        }

        if let Some(history) = &self.family_history {
            if self.relatives.is_some() {
                return Err(InputError::ConflictingFamilyHistory);
            }
            history.validate()?;
        }
        Ok(())
    }
}
