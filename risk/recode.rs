//! Recoding of raw risk factors into the categorical levels of the Cox model.
//!
//! Population-specific overrides follow the sub-models the coefficients were fitted
//! with: the CARE study for African-American women, the San Francisco Bay Area Breast
//! Cancer Study for Hispanic women, and the Asian American Breast Cancer Study.

use crate::race::RaceCategory;
use crate::types::{BiopsyStatus, HyperplasiaStatus};
use thiserror::Error;

/// Multiplier applied when no biopsy showed atypical hyperplasia.
pub const NO_HYPERPLASIA_RELATIVE_RISK: f64 = 0.93;
/// Multiplier applied when at least one biopsy showed atypical hyperplasia.
pub const ATYPICAL_HYPERPLASIA_RELATIVE_RISK: f64 = 1.82;
/// Multiplier applied when no biopsy was taken or the hyperplasia status is unknown.
pub const NEUTRAL_RELATIVE_RISK: f64 = 1.0;

/// A raw factor combination that contradicts itself.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecodingError {
    #[error("hyperplasia status '{hyperplasia}' reported with biopsies '{biopsies}'")]
    HyperplasiaWithoutBiopsy {
        biopsies: BiopsyStatus,
        hyperplasia: HyperplasiaStatus,
    },
    #[error("age at menarche {menarche} is after the current age {age}")]
    MenarcheAfterCurrentAge { menarche: u32, age: f64 },
    #[error("nulliparous subject reported a first live birth at age {0}")]
    NulliparousWithFirstBirth(u32),
}

/// Recodes the number of biopsies to 0..=2.
pub fn recode_biopsies(biopsies: BiopsyStatus, category: RaceCategory) -> u8 {
    match biopsies {
        BiopsyStatus::None | BiopsyStatus::Unknown => 0,
        BiopsyStatus::One => 1,
        // SFBCS pools two or more biopsies with one.
        BiopsyStatus::Multiple if category.is_hispanic() => 1,
        BiopsyStatus::Multiple => 2,
    }
}

/// Recodes age at menarche to 0..=2. `None` means the age is unknown.
pub fn recode_menarche(
    age_at_menarche: Option<u32>,
    current_age: f64,
    category: RaceCategory,
) -> Result<u8, RecodingError> {
    if let Some(menarche) = age_at_menarche {
        if f64::from(menarche) > current_age {
            return Err(RecodingError::MenarcheAfterCurrentAge {
                menarche,
                age: current_age,
            });
        }
    }

    if category == RaceCategory::Hispanic {
        // Menarche is not part of the US-born Hispanic model.
        return Ok(0);
    }

    let level = match age_at_menarche {
        None => 0,
        Some(age) if age >= 14 => 0,
        Some(age) if age >= 12 => 1,
        // CARE pools menarche before 12 with 12-13.
        Some(_) if category == RaceCategory::AfricanAmerican => 1,
        Some(_) => 2,
    };
    Ok(level)
}

/// Recodes age at first live birth to 0..=3.
///
/// Nulliparous subjects are coded 2, the same level as a first birth at 25-29,
/// matching the reference BCRAT coding.
pub fn recode_first_child(
    nulliparous: bool,
    age_at_first_child: Option<u32>,
    category: RaceCategory,
) -> Result<u8, RecodingError> {
    if let (true, Some(age)) = (nulliparous, age_at_first_child) {
        return Err(RecodingError::NulliparousWithFirstBirth(age));
    }

    if category == RaceCategory::AfricanAmerican {
        // Age at first birth is not part of the CARE model.
        return Ok(0);
    }
    if nulliparous {
        return Ok(2);
    }

    let hispanic = category.is_hispanic();
    let level = match age_at_first_child {
        None => 0,
        Some(age) if age < 20 => 0,
        Some(age) if age < 25 || (age < 30 && hispanic) => 1,
        Some(age) if age < 30 || hispanic => 2,
        Some(_) => 3,
    };
    Ok(level)
}

/// Recodes the number of affected first-degree relatives to 0..=2.
pub fn recode_relatives(relatives: Option<u32>, category: RaceCategory) -> u8 {
    match relatives {
        None | Some(0) => 0,
        Some(1) => 1,
        // Two or more relatives are pooled with one for Hispanic and Asian women.
        Some(_) if category.is_hispanic() || category == RaceCategory::Asian => 1,
        Some(_) => 2,
    }
}

/// Relative-risk multiplier for atypical hyperplasia.
pub fn hyperplasia_relative_risk(
    biopsies: BiopsyStatus,
    hyperplasia: HyperplasiaStatus,
    category: RaceCategory,
) -> Result<f64, RecodingError> {
    let contradictory = match biopsies {
        BiopsyStatus::None => hyperplasia == HyperplasiaStatus::Atypical,
        BiopsyStatus::Unknown => hyperplasia != HyperplasiaStatus::Unknown,
        BiopsyStatus::One | BiopsyStatus::Multiple => false,
    };
    if contradictory {
        return Err(RecodingError::HyperplasiaWithoutBiopsy {
            biopsies,
            hyperplasia,
        });
    }

    if recode_biopsies(biopsies, category) == 0 {
        return Ok(NEUTRAL_RELATIVE_RISK);
    }
    let multiplier = match hyperplasia {
        HyperplasiaStatus::None => NO_HYPERPLASIA_RELATIVE_RISK,
        HyperplasiaStatus::Atypical => ATYPICAL_HYPERPLASIA_RELATIVE_RISK,
        HyperplasiaStatus::Unknown => NEUTRAL_RELATIVE_RISK,
    };
    Ok(multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::race::Race;

    const WHITE: RaceCategory = RaceCategory::White;
    const BLACK: RaceCategory = RaceCategory::AfricanAmerican;
    const HISPANIC: RaceCategory = RaceCategory::Hispanic;
    const HISPANIC_OTHER: RaceCategory = RaceCategory::HispanicOther;
    const ASIAN: RaceCategory = RaceCategory::Asian;

    #[test]
    fn biopsies_base_mapping() {
        assert_eq!(recode_biopsies(BiopsyStatus::None, WHITE), 0);
        assert_eq!(recode_biopsies(BiopsyStatus::Unknown, WHITE), 0);
        assert_eq!(recode_biopsies(BiopsyStatus::One, WHITE), 1);
        assert_eq!(recode_biopsies(BiopsyStatus::Multiple, WHITE), 2);
        assert_eq!(recode_biopsies(BiopsyStatus::Multiple, ASIAN), 2);
    }

    #[test]
    fn biopsies_pooled_for_hispanics() {
        for category in [HISPANIC, HISPANIC_OTHER] {
            assert_eq!(recode_biopsies(BiopsyStatus::One, category), 1);
            assert_eq!(recode_biopsies(BiopsyStatus::Multiple, category), 1);
            assert_eq!(recode_biopsies(BiopsyStatus::Unknown, category), 0);
        }
    }

    #[test]
    fn menarche_levels() {
        assert_eq!(recode_menarche(Some(7), 40.0, WHITE).unwrap(), 2);
        assert_eq!(recode_menarche(Some(12), 40.0, WHITE).unwrap(), 1);
        assert_eq!(recode_menarche(Some(13), 40.0, WHITE).unwrap(), 1);
        assert_eq!(recode_menarche(Some(14), 40.0, WHITE).unwrap(), 0);
        assert_eq!(recode_menarche(None, 40.0, WHITE).unwrap(), 0);
        assert_eq!(recode_menarche(Some(7), 40.0, HISPANIC_OTHER).unwrap(), 2);
    }

    #[test]
    fn menarche_african_american_pools_early_menarche() {
        assert_eq!(recode_menarche(Some(7), 40.0, BLACK).unwrap(), 1);
        assert_eq!(recode_menarche(Some(12), 40.0, BLACK).unwrap(), 1);
        assert_eq!(recode_menarche(Some(14), 40.0, BLACK).unwrap(), 0);
    }

    #[test]
    fn menarche_eliminated_for_us_born_hispanics() {
        for menarche in [Some(7), Some(12), Some(14), None] {
            assert_eq!(recode_menarche(menarche, 40.0, HISPANIC).unwrap(), 0);
        }
    }

    #[test]
    fn menarche_after_current_age_is_rejected() {
        let err = recode_menarche(Some(37), 35.0, WHITE).unwrap_err();
        assert_eq!(
            err,
            RecodingError::MenarcheAfterCurrentAge {
                menarche: 37,
                age: 35.0
            }
        );
    }

    #[test]
    fn first_child_levels() {
        assert_eq!(recode_first_child(false, Some(19), WHITE).unwrap(), 0);
        assert_eq!(recode_first_child(false, Some(20), WHITE).unwrap(), 1);
        assert_eq!(recode_first_child(false, Some(25), WHITE).unwrap(), 2);
        assert_eq!(recode_first_child(false, Some(40), WHITE).unwrap(), 3);
        assert_eq!(recode_first_child(false, None, WHITE).unwrap(), 0);
        assert_eq!(recode_first_child(true, None, WHITE).unwrap(), 2);
    }

    #[test]
    fn first_child_eliminated_for_african_americans() {
        for age in [Some(10), Some(19), Some(20), Some(25), Some(40), None] {
            assert_eq!(recode_first_child(false, age, BLACK).unwrap(), 0);
        }
        assert_eq!(recode_first_child(true, None, BLACK).unwrap(), 0);
    }

    #[test]
    fn first_child_hispanic_collapses_levels() {
        assert_eq!(recode_first_child(false, Some(19), HISPANIC).unwrap(), 0);
        assert_eq!(recode_first_child(false, Some(20), HISPANIC).unwrap(), 1);
        assert_eq!(recode_first_child(false, Some(25), HISPANIC).unwrap(), 1);
        assert_eq!(recode_first_child(false, Some(40), HISPANIC).unwrap(), 2);
        assert_eq!(recode_first_child(false, None, HISPANIC).unwrap(), 0);
        assert_eq!(recode_first_child(true, None, HISPANIC).unwrap(), 2);
        assert_eq!(recode_first_child(false, Some(29), HISPANIC_OTHER).unwrap(), 1);
        assert_eq!(recode_first_child(false, Some(30), HISPANIC_OTHER).unwrap(), 2);
    }

    #[test]
    fn nulliparous_with_birth_age_is_rejected() {
        let err = recode_first_child(true, Some(24), WHITE).unwrap_err();
        assert_eq!(err, RecodingError::NulliparousWithFirstBirth(24));
    }

    #[test]
    fn relatives_levels() {
        assert_eq!(recode_relatives(Some(0), WHITE), 0);
        assert_eq!(recode_relatives(None, WHITE), 0);
        assert_eq!(recode_relatives(Some(1), WHITE), 1);
        assert_eq!(recode_relatives(Some(2), WHITE), 2);
        assert_eq!(recode_relatives(Some(3), WHITE), 2);
        assert_eq!(recode_relatives(Some(0), ASIAN), 0);
        assert_eq!(recode_relatives(Some(0), HISPANIC), 0);
        for category in [ASIAN, HISPANIC, HISPANIC_OTHER] {
            assert_eq!(recode_relatives(Some(2), category), 1);
            assert_eq!(recode_relatives(Some(3), category), 1);
        }
        assert_eq!(recode_relatives(Some(2), Race::Hawaiian.category()), 1);
    }

    #[test]
    fn hyperplasia_multipliers() {
        use BiopsyStatus as B;
        use HyperplasiaStatus as H;
        for category in [WHITE, HISPANIC] {
            assert_eq!(hyperplasia_relative_risk(B::None, H::Unknown, category).unwrap(), 1.0);
            assert_eq!(hyperplasia_relative_risk(B::None, H::None, category).unwrap(), 1.0);
            assert_eq!(hyperplasia_relative_risk(B::One, H::None, category).unwrap(), 0.93);
            assert_eq!(hyperplasia_relative_risk(B::One, H::Atypical, category).unwrap(), 1.82);
            assert_eq!(hyperplasia_relative_risk(B::One, H::Unknown, category).unwrap(), 1.0);
            assert_eq!(hyperplasia_relative_risk(B::Multiple, H::None, category).unwrap(), 0.93);
            assert_eq!(
                hyperplasia_relative_risk(B::Multiple, H::Atypical, category).unwrap(),
                1.82
            );
            assert_eq!(
                hyperplasia_relative_risk(B::Multiple, H::Unknown, category).unwrap(),
                1.0
            );
            assert_eq!(hyperplasia_relative_risk(B::Unknown, H::Unknown, category).unwrap(), 1.0);
        }
    }

    #[test]
    fn hyperplasia_without_biopsy_is_rejected() {
        use BiopsyStatus as B;
        use HyperplasiaStatus as H;
        assert!(matches!(
            hyperplasia_relative_risk(B::None, H::Atypical, WHITE),
            Err(RecodingError::HyperplasiaWithoutBiopsy { .. })
        ));
        assert!(hyperplasia_relative_risk(B::Unknown, H::None, WHITE).is_err());
        assert!(hyperplasia_relative_risk(B::Unknown, H::Atypical, HISPANIC).is_err());
    }
}
