//! Validated, recoded risk factors of a single subject.

use crate::config::AgeLimits;
use crate::error::RiskError;
use crate::input::RiskInput;
use crate::parameters::ParameterSet;
use crate::race::{Race, RaceCategory};
use crate::recode;
use thiserror::Error;

pub const MAX_BIOPSY_LEVEL: u8 = 2;
pub const MAX_MENARCHE_LEVEL: u8 = 2;
pub const MAX_FIRST_CHILD_LEVEL: u8 = 3;
pub const MAX_RELATIVES_LEVEL: u8 = 2;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FactorError {
    #[error("age {age} is outside the supported range [{min}, {max})")]
    AgeOutOfRange { age: f64, min: f64, max: f64 },
    #[error("{factor} level {level} exceeds the maximum of {max}")]
    LevelOutOfRange {
        factor: &'static str,
        level: u8,
        max: u8,
    },
    #[error("hyperplasia multiplier must be positive and finite, got {0}")]
    NonPositiveMultiplier(f64),
}

/// Recoded factors ready for the relative- and absolute-risk calculators.
///
/// Fields are private: a value only exists if every bound held at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskFactors {
    age: f64,
    biopsies: u8,
    menarche: u8,
    first_child: u8,
    relatives: u8,
    hyperplasia_multiplier: f64,
    race: Race,
}

fn check_level(factor: &'static str, level: u8, max: u8) -> Result<(), FactorError> {
    if level > max {
        return Err(FactorError::LevelOutOfRange { factor, level, max });
    }
    Ok(())
}

impl RiskFactors {
    /// Builds factors under the reference age range of 25 to 80.
    pub fn new(
        age: f64,
        biopsies: u8,
        menarche: u8,
        first_child: u8,
        relatives: u8,
        hyperplasia_multiplier: f64,
        race: Race,
    ) -> Result<Self, FactorError> {
        Self::with_limits(
            &AgeLimits::REFERENCE,
            age,
            biopsies,
            menarche,
            first_child,
            relatives,
            hyperplasia_multiplier,
            race,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_limits(
        limits: &AgeLimits,
        age: f64,
        biopsies: u8,
        menarche: u8,
        first_child: u8,
        relatives: u8,
        hyperplasia_multiplier: f64,
        race: Race,
    ) -> Result<Self, FactorError> {
        if !limits.contains(age) {
            return Err(FactorError::AgeOutOfRange {
                age,
                min: limits.min_age,
                max: limits.max_age,
            });
        }
        check_level("biopsies", biopsies, MAX_BIOPSY_LEVEL)?;
        check_level("menarche", menarche, MAX_MENARCHE_LEVEL)?;
        check_level("first child", first_child, MAX_FIRST_CHILD_LEVEL)?;
        check_level("relatives", relatives, MAX_RELATIVES_LEVEL)?;
        if !hyperplasia_multiplier.is_finite() || hyperplasia_multiplier <= 0.0 {
            return Err(FactorError::NonPositiveMultiplier(hyperplasia_multiplier));
        }

        Ok(Self {
            age,
            biopsies,
            menarche,
            first_child,
            relatives,
            hyperplasia_multiplier,
            race,
        })
    }

    /// Validates raw answers, then maps and recodes every factor.
    pub fn from_input(input: &RiskInput, limits: &AgeLimits) -> Result<Self, RiskError> {
        input.validate()?;
        let category = input.race.category();

        let biopsies = recode::recode_biopsies(input.biopsies, category);
        let menarche = recode::recode_menarche(input.age_at_menarche, input.age, category)?;
        let first_child =
            recode::recode_first_child(input.nulliparous, input.age_at_first_child, category)?;
        let relatives = recode::recode_relatives(input.number_of_relatives(), category);
        let multiplier =
            recode::hyperplasia_relative_risk(input.biopsies, input.hyperplasia, category)?;

        let factors = Self::with_limits(
            limits,
            input.age,
            biopsies,
            menarche,
            first_child,
            relatives,
            multiplier,
            input.race,
        )?;
        Ok(factors)
    }

    #[inline]
    pub fn age(&self) -> f64 {
        self.age
    }

    #[inline]
    pub fn biopsies(&self) -> u8 {
        self.biopsies
    }

    #[inline]
    pub fn menarche(&self) -> u8 {
        self.menarche
    }

    #[inline]
    pub fn first_child(&self) -> u8 {
        self.first_child
    }

    #[inline]
    pub fn relatives(&self) -> u8 {
        self.relatives
    }

    #[inline]
    pub fn hyperplasia_multiplier(&self) -> f64 {
        self.hyperplasia_multiplier
    }

    #[inline]
    pub fn race(&self) -> Race {
        self.race
    }

    #[inline]
    pub fn category(&self) -> RaceCategory {
        self.race.category()
    }

    #[inline]
    pub fn parameters(&self) -> ParameterSet {
        ParameterSet::for_race(self.race)
    }
}
