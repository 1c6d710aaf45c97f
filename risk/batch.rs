//! Bulk evaluation over many subjects.
//!
//! Every record goes through the same single-subject path as [`assess`]; rayon only
//! spreads the records over threads. Output order always matches input order.

use crate::absolute::{self, ProjectionError};
use crate::assess::{Assessment, assess};
use crate::config::EngineConfig;
use crate::error::RiskError;
use crate::factors::RiskFactors;
use crate::input::RiskInput;
use crate::relative;
use ndarray::Array1;
use rayon::prelude::*;

/// Assesses every input, keeping one result per record.
pub fn assess_all(
    inputs: &[RiskInput],
    years: f64,
    config: &EngineConfig,
) -> Vec<Result<Assessment, RiskError>> {
    log::debug!(
        "Assessing {} records over a {years}-year horizon",
        inputs.len()
    );
    let results: Vec<Result<Assessment, RiskError>> = inputs
        .par_iter()
        .map(|input| assess(input, years, config))
        .collect();

    for (index, result) in results.iter().enumerate() {
        if let Err(e) = result {
            log::warn!("Record {} rejected: {e}", index + 1);
        }
    }
    results
}

/// Absolute risks for already-recoded subjects. Fails on the first invalid horizon.
pub fn absolute_risks(
    factors: &[RiskFactors],
    years: f64,
) -> Result<Array1<f64>, ProjectionError> {
    let risks = factors
        .par_iter()
        .map(|f| absolute::predict(f, years))
        .collect::<Result<Vec<f64>, _>>()?;
    Ok(Array1::from_vec(risks))
}

/// Relative risks at each subject's current age.
pub fn relative_risks(factors: &[RiskFactors]) -> Array1<f64> {
    let risks: Vec<f64> = factors
        .par_iter()
        .map(|f| relative::relative_risk(f, f.age()))
        .collect();
    Array1::from_vec(risks)
}
