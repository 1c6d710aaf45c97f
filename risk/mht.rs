use crate::types::MhtFormulation;

pub const OESTROGEN_ONLY_RELATIVE_RISK: f64 = 1.3;
pub const COMBINED_RELATIVE_RISK: f64 = 2.0;

/// Relative risk of current menopausal hormone therapy use, from the
/// Collaborative Group on Hormonal Factors in Breast Cancer estimates.
pub fn relative_risk(formulation: MhtFormulation) -> f64 {
    match formulation {
        MhtFormulation::None => 1.0,
        MhtFormulation::Oestrogen => OESTROGEN_ONLY_RELATIVE_RISK,
        MhtFormulation::Combined => COMBINED_RELATIVE_RISK,
    }
}
