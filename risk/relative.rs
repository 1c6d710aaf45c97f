use crate::factors::RiskFactors;
use crate::parameters::age_pivot_flag;

/// Linear predictor of the Cox sub-model at `at_age`.
///
/// The "after 50" biopsy interaction switches on strictly above the pivot age.
pub fn linear_predictor(factors: &RiskFactors, at_age: f64) -> f64 {
    let beta = factors.parameters().coefficients;
    let biopsies = f64::from(factors.biopsies());
    let menarche = f64::from(factors.menarche());
    let first_child = f64::from(factors.first_child());
    let relatives = f64::from(factors.relatives());
    let after_pivot = age_pivot_flag(at_age) as f64;

    biopsies * beta.biopsies
        + menarche * beta.menarche
        + first_child * beta.first_child
        + relatives * beta.relatives
        + biopsies * after_pivot * beta.biopsies_after_pivot
        + first_child * relatives * beta.first_child_by_relatives
        + factors.hyperplasia_multiplier().ln()
}

/// Relative risk versus a subject with every factor at its baseline level.
#[inline]
pub fn relative_risk(factors: &RiskFactors, at_age: f64) -> f64 {
    linear_predictor(factors, at_age).exp()
}
