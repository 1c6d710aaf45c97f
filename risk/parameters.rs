//! Fixed parameter tables of the Gail model.
//!
//! Rates are tabulated in fourteen 5-year age bands covering ages 20 to 90. Every
//! competing-mortality rate is strictly positive, so the combined hazard used by the
//! absolute-risk integrator can never be zero.

use crate::race::{Race, RaceCategory};

pub const NUM_AGE_BANDS: usize = 14;
pub const AGE_BAND_WIDTH: usize = 5;
/// Lower edge of the first tabulated band.
pub const FIRST_TABULATED_AGE: u32 = 20;
/// Upper edge of the last tabulated band.
pub const LAST_TABULATED_AGE: u32 = 90;
/// Ages strictly above the pivot use the "after 50" biopsy effect and unattributable risk.
pub const PIVOT_AGE: f64 = 50.0;

pub type AgeBandRates = [f64; NUM_AGE_BANDS];

/// Log hazard ratios of the Cox relative-risk sub-model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub biopsies: f64,
    pub menarche: f64,
    pub first_child: f64,
    pub relatives: f64,
    /// Extra biopsy effect applied only after the pivot age.
    pub biopsies_after_pivot: f64,
    pub first_child_by_relatives: f64,
}

/// Everything the calculators need for one subject, borrowed from the static tables.
#[derive(Debug, Clone, Copy)]
pub struct ParameterSet {
    pub coefficients: &'static Coefficients,
    pub incidence: &'static AgeBandRates,
    pub competing_mortality: &'static AgeBandRates,
    /// 1 - attributable risk, indexed by the age-pivot flag.
    pub unattributable_risk: &'static [f64; 2],
}

impl ParameterSet {
    pub fn for_race(race: Race) -> Self {
        let category = race.category();
        Self {
            coefficients: coefficients(category),
            incidence: incidence_rates(race),
            competing_mortality: competing_mortality_rates(race),
            unattributable_risk: unattributable_risk(category),
        }
    }

    #[inline]
    pub fn unattributable_at(&self, at_age: f64) -> f64 {
        self.unattributable_risk[age_pivot_flag(at_age)]
    }
}

/// 1 when `at_age` lies after the pivot age, 0 otherwise.
#[inline]
pub fn age_pivot_flag(at_age: f64) -> usize {
    if at_age > PIVOT_AGE { 1 } else { 0 }
}

pub fn coefficients(category: RaceCategory) -> &'static Coefficients {
    match category {
        RaceCategory::White | RaceCategory::WhiteOther => &BETA_WHITE,
        RaceCategory::AfricanAmerican => &BETA_AFRICAN_AMERICAN,
        RaceCategory::Hispanic => &BETA_HISPANIC,
        RaceCategory::HispanicOther => &BETA_HISPANIC_OTHER,
        RaceCategory::Asian => &BETA_ASIAN,
    }
}

pub fn unattributable_risk(category: RaceCategory) -> &'static [f64; 2] {
    match category {
        RaceCategory::White | RaceCategory::WhiteOther => &UNATTRIBUTABLE_WHITE,
        RaceCategory::AfricanAmerican => &UNATTRIBUTABLE_AFRICAN_AMERICAN,
        RaceCategory::Hispanic => &UNATTRIBUTABLE_HISPANIC,
        RaceCategory::HispanicOther => &UNATTRIBUTABLE_HISPANIC_OTHER,
        RaceCategory::Asian => &UNATTRIBUTABLE_ASIAN,
    }
}

pub fn incidence_rates(race: Race) -> &'static AgeBandRates {
    match race {
        Race::White | Race::WhiteOther => &INCIDENCE_WHITE,
        Race::AfricanAmerican => &INCIDENCE_AFRICAN_AMERICAN,
        Race::HispanicUs => &INCIDENCE_HISPANIC_US,
        Race::HispanicForeign => &INCIDENCE_HISPANIC_FOREIGN,
        Race::Chinese => &INCIDENCE_CHINESE,
        Race::Japanese => &INCIDENCE_JAPANESE,
        Race::Filipino => &INCIDENCE_FILIPINO,
        Race::Hawaiian => &INCIDENCE_HAWAIIAN,
        Race::PacificIslander => &INCIDENCE_PACIFIC_ISLANDER,
        Race::AsianOther => &INCIDENCE_ASIAN_OTHER,
    }
}

pub fn competing_mortality_rates(race: Race) -> &'static AgeBandRates {
    match race {
        Race::White | Race::WhiteOther => &MORTALITY_WHITE,
        Race::AfricanAmerican => &MORTALITY_AFRICAN_AMERICAN,
        Race::HispanicUs => &MORTALITY_HISPANIC_US,
        Race::HispanicForeign => &MORTALITY_HISPANIC_FOREIGN,
        Race::Chinese => &MORTALITY_CHINESE,
        Race::Japanese => &MORTALITY_JAPANESE,
        Race::Filipino => &MORTALITY_FILIPINO,
        Race::Hawaiian => &MORTALITY_HAWAIIAN,
        Race::PacificIslander => &MORTALITY_PACIFIC_ISLANDER,
        Race::AsianOther => &MORTALITY_ASIAN_OTHER,
    }
}

// ========================================================================================
//                               Cox model coefficients
// ========================================================================================

static BETA_WHITE: Coefficients = Coefficients {
    biopsies: 0.5292641686,
    menarche: 0.0940103059,
    first_child: 0.2186262218,
    relatives: 0.9583027845,
    biopsies_after_pivot: -0.2880424830,
    first_child_by_relatives: -0.1908113865,
};

// CARE study: age at first birth eliminated.
static BETA_AFRICAN_AMERICAN: Coefficients = Coefficients {
    biopsies: 0.1822121131,
    menarche: 0.2672530336,
    first_child: 0.0,
    relatives: 0.4757242578,
    biopsies_after_pivot: -0.1119411682,
    first_child_by_relatives: 0.0,
};

// San Francisco Bay Area Breast Cancer Study, US-born: menarche eliminated.
static BETA_HISPANIC: Coefficients = Coefficients {
    biopsies: 0.0970783641,
    menarche: 0.0,
    first_child: 0.2318368334,
    relatives: 0.166685441,
    biopsies_after_pivot: 0.0,
    first_child_by_relatives: 0.0,
};

static BETA_HISPANIC_OTHER: Coefficients = Coefficients {
    biopsies: 0.4798624017,
    menarche: 0.2593922322,
    first_child: 0.4669246218,
    relatives: 0.9076679727,
    biopsies_after_pivot: 0.0,
    first_child_by_relatives: 0.0,
};

static BETA_ASIAN: Coefficients = Coefficients {
    biopsies: 0.55263612260619,
    menarche: 0.07499257592975,
    first_child: 0.27638268294593,
    relatives: 0.79185633720481,
    biopsies_after_pivot: 0.0,
    first_child_by_relatives: 0.0,
};

// ========================================================================================
//                       Unattributable risk, F(t) = 1 - attributable risk
// ========================================================================================

static UNATTRIBUTABLE_WHITE: [f64; 2] = [0.5788413, 0.5788413];
static UNATTRIBUTABLE_AFRICAN_AMERICAN: [f64; 2] = [0.72949880, 0.74397137];
static UNATTRIBUTABLE_HISPANIC: [f64; 2] = [0.749294788397, 0.778215491668];
static UNATTRIBUTABLE_HISPANIC_OTHER: [f64; 2] = [0.428864989813, 0.450352338746];
static UNATTRIBUTABLE_ASIAN: [f64; 2] = [0.47519806426735, 0.50316401683903];

// ========================================================================================
//                     Breast cancer incidence and competing mortality
// ========================================================================================

// SEER white women 1983-87
static INCIDENCE_WHITE: AgeBandRates = [
    0.00001000, 0.00007600, 0.00026600, 0.00066100,
    0.00126500, 0.00186600, 0.00221100, 0.00272100,
    0.00334800, 0.00392300, 0.00417800, 0.00443900,
    0.00442100, 0.00410900,
];

// SEER black women 1994-98
static INCIDENCE_AFRICAN_AMERICAN: AgeBandRates = [
    0.00002696, 0.00011295, 0.00031094, 0.00067639,
    0.00119444, 0.00187394, 0.00241504, 0.00291112,
    0.00310127, 0.00366560, 0.00393132, 0.00408951,
    0.00396793, 0.00363712,
];

// SEER California Hispanic women 1995-2004
static INCIDENCE_HISPANIC_US: AgeBandRates = [
    0.0000166, 0.0000741, 0.0002740, 0.0006099,
    0.0012225, 0.0019027, 0.0023142, 0.0028357,
    0.0031144, 0.0030794, 0.0033344, 0.0035082,
    0.0025308, 0.0020414,
];

// SEER California Hispanic women 1995-2004
static INCIDENCE_HISPANIC_FOREIGN: AgeBandRates = [
    0.0000102, 0.0000531, 0.0001578, 0.0003602,
    0.0007617, 0.0011599, 0.0014111, 0.0017245,
    0.0020619, 0.0023603, 0.0025575, 0.0028227,
    0.0028295, 0.0025868,
];

// SEER18 Chinese women 1998-2002
static INCIDENCE_CHINESE: AgeBandRates = [
    0.000004059636, 0.000045944465, 0.000188279352, 0.000492930493,
    0.000913603501, 0.001471537353, 0.001421275482, 0.001970946494,
    0.001674745804, 0.001821581075, 0.001834477198, 0.001919911972,
    0.002233371071, 0.002247315779,
];

// SEER18 Japanese women 1998-2002
static INCIDENCE_JAPANESE: AgeBandRates = [
    0.000000000001, 0.000099483924, 0.000287041681, 0.000545285759,
    0.001152211095, 0.001859245108, 0.002606291272, 0.003221751682,
    0.004006961859, 0.003521715275, 0.003593038294, 0.003589303081,
    0.003538507159, 0.002051572909,
];

// SEER18 Filipino women 1998-2002
static INCIDENCE_FILIPINO: AgeBandRates = [
    0.000007500161, 0.000081073945, 0.000227492565, 0.000549786433,
    0.001129400541, 0.001813873795, 0.002223665639, 0.002680309266,
    0.002891219230, 0.002534421279, 0.002457159409, 0.002286616920,
    0.001814802825, 0.001750879130,
];

// SEER18 Hawaiian women 1998-2002
static INCIDENCE_HAWAIIAN: AgeBandRates = [
    0.000045080582, 0.000098570724, 0.000339970860, 0.000852591429,
    0.001668562761, 0.002552703284, 0.003321774046, 0.005373001776,
    0.005237808549, 0.005581732512, 0.005677419355, 0.006513409962,
    0.003889457523, 0.002949061662,
];

// SEER18 other Pacific Islander women 1998-2002
static INCIDENCE_PACIFIC_ISLANDER: AgeBandRates = [
    0.000000000001, 0.000071525212, 0.000288799028, 0.000602250698,
    0.000755579402, 0.000766406354, 0.001893124938, 0.002365580107,
    0.002843933070, 0.002920921732, 0.002330395655, 0.002036291235,
    0.001482683983, 0.001012248203,
];

// SEER18 other Asian women 1998-2002
static INCIDENCE_ASIAN_OTHER: AgeBandRates = [
    0.000012355409, 0.000059526456, 0.000184320831, 0.000454677273,
    0.000791265338, 0.001048462801, 0.001372467817, 0.001495473711,
    0.001646746198, 0.001478363563, 0.001216010125, 0.001067663700,
    0.001376104012, 0.000661576644,
];

// NCHS white women 1985-87
static MORTALITY_WHITE: AgeBandRates = [
    0.00049300, 0.00053100, 0.00062500, 0.00082500,
    0.00130700, 0.00218100, 0.00365500, 0.00585200,
    0.00943900, 0.01502800, 0.02383900, 0.03883200,
    0.06682800, 0.14490800,
];

// NCHS black women 1996-2000
static MORTALITY_AFRICAN_AMERICAN: AgeBandRates = [
    0.00074354, 0.00101698, 0.00145937, 0.00215933,
    0.00315077, 0.00448779, 0.00632281, 0.00963037,
    0.01471818, 0.02116304, 0.03266035, 0.04564087,
    0.06835185, 0.13271262,
];

// California Hispanic women 1995-2004
static MORTALITY_HISPANIC_US: AgeBandRates = [
    0.0003561, 0.0004038, 0.0005281, 0.0008875,
    0.0013987, 0.0020769, 0.0030912, 0.0046960,
    0.0076050, 0.0120555, 0.0193805, 0.0288386,
    0.0429634, 0.0740349,
];

// California Hispanic women 1995-2004
static MORTALITY_HISPANIC_FOREIGN: AgeBandRates = [
    0.0003129, 0.0002908, 0.0003515, 0.0004943,
    0.0007807, 0.0012840, 0.0020325, 0.0034533,
    0.0058674, 0.0096888, 0.0154429, 0.0254675,
    0.0448037, 0.1125678,
];

// NCHS Chinese women 1998-2002
static MORTALITY_CHINESE: AgeBandRates = [
    0.000210649076, 0.000192644865, 0.000244435215, 0.000317895949,
    0.000473261994, 0.000800271380, 0.001217480226, 0.002099836508,
    0.003436889186, 0.006097405623, 0.010664526765, 0.020148678452,
    0.037990796590, 0.098333900733,
];

// NCHS Japanese women 1998-2002
static MORTALITY_JAPANESE: AgeBandRates = [
    0.000173593803, 0.000295805882, 0.000228322534, 0.000363242389,
    0.000590633044, 0.001086079485, 0.001859999966, 0.003216600974,
    0.004719402141, 0.008535331402, 0.012433511681, 0.020230197885,
    0.037725498348, 0.106149118663,
];

// NCHS Filipino women 1998-2002
static MORTALITY_FILIPINO: AgeBandRates = [
    0.000229120979, 0.000262988494, 0.000314844090, 0.000394471908,
    0.000647622610, 0.001170202327, 0.001809380379, 0.002614170568,
    0.004483330681, 0.007393665092, 0.012233059675, 0.021127058106,
    0.037936954809, 0.085138518334,
];

// NCHS Hawaiian women 1998-2002
static MORTALITY_HAWAIIAN: AgeBandRates = [
    0.000563507269, 0.000369640217, 0.001019912579, 0.001234013911,
    0.002098344078, 0.002982934175, 0.005402445702, 0.009591474245,
    0.016315472607, 0.020152229069, 0.027354838710, 0.050446998723,
    0.072262026612, 0.145844504021,
];

// NCHS other Pacific Islander women 1998-2002
static MORTALITY_PACIFIC_ISLANDER: AgeBandRates = [
    0.000465500812, 0.000600466920, 0.000851057138, 0.001478265376,
    0.001931486788, 0.003866623959, 0.004924932309, 0.008177071806,
    0.008638202890, 0.018974658371, 0.029257567105, 0.038408980974,
    0.052869579345, 0.074745721133,
];

// NCHS other Asian women 1998-2002
static MORTALITY_ASIAN_OTHER: AgeBandRates = [
    0.000212632332, 0.000242170741, 0.000301552711, 0.000369053354,
    0.000543002943, 0.000893862331, 0.001515172239, 0.002574669551,
    0.004324370426, 0.007419621918, 0.013251765130, 0.022291427490,
    0.041746550635, 0.087485802065,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tables() -> Vec<(Race, &'static AgeBandRates, &'static AgeBandRates)> {
        Race::ALL
            .into_iter()
            .map(|race| (race, incidence_rates(race), competing_mortality_rates(race)))
            .collect()
    }

    #[test]
    fn bands_cover_twenty_to_ninety() {
        assert_eq!(
            FIRST_TABULATED_AGE as usize + NUM_AGE_BANDS * AGE_BAND_WIDTH,
            LAST_TABULATED_AGE as usize
        );
    }

    #[test]
    fn rates_are_probabilities() {
        for (race, incidence, mortality) in all_tables() {
            for &rate in incidence.iter().chain(mortality.iter()) {
                assert!(rate > 0.0 && rate < 1.0, "{race}: rate {rate} outside (0, 1)");
            }
        }
    }

    #[test]
    fn competing_mortality_keeps_combined_hazard_positive() {
        for (race, _, mortality) in all_tables() {
            assert!(
                mortality.iter().all(|&rate| rate > 0.0),
                "{race} has a zero mortality band"
            );
        }
    }

    #[test]
    fn unattributable_risk_is_a_fraction() {
        for race in Race::ALL {
            let set = ParameterSet::for_race(race);
            for &value in set.unattributable_risk {
                assert!(value > 0.0 && value < 1.0);
            }
        }
    }

    #[test]
    fn white_other_shares_white_tables() {
        let white = ParameterSet::for_race(Race::White);
        let other = ParameterSet::for_race(Race::WhiteOther);
        assert_eq!(white.coefficients, other.coefficients);
        assert_eq!(white.incidence, other.incidence);
        assert_eq!(white.competing_mortality, other.competing_mortality);
    }

    #[test]
    fn asian_subgroups_share_coefficients_but_not_rates() {
        let chinese = ParameterSet::for_race(Race::Chinese);
        let japanese = ParameterSet::for_race(Race::Japanese);
        assert!(std::ptr::eq(chinese.coefficients, japanese.coefficients));
        assert_ne!(chinese.incidence, japanese.incidence);
    }

    #[test]
    fn pivot_flag_is_strict() {
        assert_eq!(age_pivot_flag(49.0), 0);
        assert_eq!(age_pivot_flag(50.0), 0);
        assert_eq!(age_pivot_flag(50.5), 1);
        assert_eq!(age_pivot_flag(51.0), 1);
    }

    #[test]
    fn unattributable_follows_pivot() {
        let set = ParameterSet::for_race(Race::AfricanAmerican);
        assert_eq!(set.unattributable_at(45.0), 0.72949880);
        assert_eq!(set.unattributable_at(56.0), 0.74397137);
    }
}
