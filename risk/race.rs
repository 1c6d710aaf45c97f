use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-reported ethnicity of the subject.
///
/// Baseline incidence and competing-mortality rates are tabulated per ethnicity,
/// while the relative-risk coefficients are shared within a [`RaceCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    White,
    AfricanAmerican,
    HispanicUs,
    WhiteOther,
    HispanicForeign,
    Chinese,
    Japanese,
    Filipino,
    Hawaiian,
    PacificIslander,
    AsianOther,
}

/// Population category used for coefficient lookups and recoding overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceCategory {
    White,
    AfricanAmerican,
    /// US-born Hispanic women.
    Hispanic,
    WhiteOther,
    /// Foreign-born Hispanic women.
    HispanicOther,
    Asian,
}

impl Race {
    pub const ALL: [Race; 11] = [
        Race::White,
        Race::AfricanAmerican,
        Race::HispanicUs,
        Race::WhiteOther,
        Race::HispanicForeign,
        Race::Chinese,
        Race::Japanese,
        Race::Filipino,
        Race::Hawaiian,
        Race::PacificIslander,
        Race::AsianOther,
    ];

    pub fn category(self) -> RaceCategory {
        match self {
            Race::White => RaceCategory::White,
            Race::AfricanAmerican => RaceCategory::AfricanAmerican,
            Race::HispanicUs => RaceCategory::Hispanic,
            Race::WhiteOther => RaceCategory::WhiteOther,
            Race::HispanicForeign => RaceCategory::HispanicOther,
            Race::Chinese
            | Race::Japanese
            | Race::Filipino
            | Race::Hawaiian
            | Race::PacificIslander
            | Race::AsianOther => RaceCategory::Asian,
        }
    }

    #[inline]
    pub fn is_hispanic(self) -> bool {
        self.category().is_hispanic()
    }

    #[inline]
    pub fn is_asian(self) -> bool {
        self.category() == RaceCategory::Asian
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Race::White => "white",
            Race::AfricanAmerican => "african_american",
            Race::HispanicUs => "hispanic_us",
            Race::WhiteOther => "white_other",
            Race::HispanicForeign => "hispanic_foreign",
            Race::Chinese => "chinese",
            Race::Japanese => "japanese",
            Race::Filipino => "filipino",
            Race::Hawaiian => "hawaiian",
            Race::PacificIslander => "pacific_islander",
            Race::AsianOther => "asian_other",
        }
    }
}

impl RaceCategory {
    /// Both Hispanic categories share the pooled SFBCS recodings.
    #[inline]
    pub fn is_hispanic(self) -> bool {
        matches!(self, RaceCategory::Hispanic | RaceCategory::HispanicOther)
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asian_subgroups_collapse_to_one_category() {
        let asians: Vec<Race> = Race::ALL.into_iter().filter(|r| r.is_asian()).collect();
        assert_eq!(
            asians,
            vec![
                Race::Chinese,
                Race::Japanese,
                Race::Filipino,
                Race::Hawaiian,
                Race::PacificIslander,
                Race::AsianOther,
            ]
        );
        for race in asians {
            assert_eq!(race.category(), RaceCategory::Asian);
        }
    }

    #[test]
    fn hispanic_subgroups_keep_separate_categories() {
        assert_eq!(Race::HispanicUs.category(), RaceCategory::Hispanic);
        assert_eq!(Race::HispanicForeign.category(), RaceCategory::HispanicOther);
        assert!(Race::HispanicUs.is_hispanic());
        assert!(Race::HispanicForeign.is_hispanic());
        assert!(!Race::White.is_hispanic());
        assert!(!Race::Chinese.is_hispanic());
    }

    #[test]
    fn one_to_one_categories() {
        assert_eq!(Race::White.category(), RaceCategory::White);
        assert_eq!(Race::WhiteOther.category(), RaceCategory::WhiteOther);
        assert_eq!(Race::AfricanAmerican.category(), RaceCategory::AfricanAmerican);
    }

    #[test]
    fn labels_round_trip_through_serde() {
        #[derive(Deserialize)]
        struct Row {
            race: Race,
        }
        for race in Race::ALL {
            let row: Row = toml::from_str(&format!("race = \"{race}\"")).unwrap();
            assert_eq!(row.race, race);
        }
    }
}
