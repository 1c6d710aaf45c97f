//! Absolute risk of developing breast cancer over a horizon, accounting for the
//! competing risk of death from other causes.
//!
//! The horizon is split at integer ages. Interval `i` covers ages `[19 + i, 20 + i]`
//! and uses the rates of band `(i - 1) / 5`. Within an interval the hazards are
//! constant, so the probability of a first diagnosis there is
//!
//! ```text
//! p_i = (u_i * h1_i / lambda_i) * exp(-H) * (1 - exp(-lambda_i * L_i))
//! ```
//!
//! with `u_i` the attributable relative risk at the interval's end age, `h1_i` the
//! composite incidence, `lambda_i = h1_i * u_i + h2_i` the combined hazard and `H`
//! the hazard accumulated over the earlier intervals. Every competing-mortality rate
//! is strictly positive, which keeps `lambda_i` away from zero.

use crate::factors::RiskFactors;
use crate::parameters::{AGE_BAND_WIDTH, FIRST_TABULATED_AGE, LAST_TABULATED_AGE};
use crate::relative::relative_risk;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("projection horizon must be a finite, non-negative number of years, got {0}")]
    InvalidHorizon(f64),
    #[error("projection would end at age {end}, beyond the last tabulated age 90")]
    BeyondTables { end: f64 },
    #[error("projection starts at age {start}, before the first tabulated age 20")]
    BeforeTables { start: f64 },
}

/// Outcome of integrating the hazards over a horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Probability of a diagnosis within the horizon, in `[0, 1)`.
    pub absolute_risk: f64,
    /// Combined incidence plus competing hazard accumulated over the horizon.
    pub cumulative_hazard: f64,
}

impl Projection {
    /// Probability of surviving the horizon free of both events.
    #[inline]
    pub fn survival(&self) -> f64 {
        (-self.cumulative_hazard).exp()
    }
}

/// Length of one integration interval.
#[inline]
fn interval_length(start: f64, end: f64, is_first: bool, is_last: bool) -> f64 {
    match (is_first, is_last) {
        (true, true) => end - start,
        (true, false) => 1.0 - start.fract(),
        (false, true) => {
            let tail = end.fract();
            // A horizon ending on an integer age covers its last interval fully.
            if tail == 0.0 { 1.0 } else { tail }
        }
        (false, false) => 1.0,
    }
}

/// Integrates the hazards from the subject's current age over `years`.
pub fn project(factors: &RiskFactors, years: f64) -> Result<Projection, ProjectionError> {
    if !years.is_finite() || years < 0.0 {
        return Err(ProjectionError::InvalidHorizon(years));
    }
    let start = factors.age();
    let end = start + years;
    if start < f64::from(FIRST_TABULATED_AGE) {
        return Err(ProjectionError::BeforeTables { start });
    }
    if end > f64::from(LAST_TABULATED_AGE) {
        return Err(ProjectionError::BeyondTables { end });
    }

    let params = factors.parameters();
    let offset = i64::from(FIRST_TABULATED_AGE);
    let first = start.floor() as i64 - offset + 1;
    let last = end.ceil() as i64 - offset;

    let mut absolute_risk: f64 = 0.0;
    let mut cumulative_hazard: f64 = 0.0;
    for interval in first..=last {
        let band = (interval - 1) as usize / AGE_BAND_WIDTH;
        let length = interval_length(start, end, interval == first, interval == last);
        let at_age = (offset + interval) as f64;

        let attributable = params.unattributable_at(at_age) * relative_risk(factors, at_age);
        let incidence = params.incidence[band];
        let combined = incidence * attributable + params.competing_mortality[band];

        absolute_risk += (attributable * incidence / combined)
            * (-cumulative_hazard).exp()
            * (1.0 - (-combined * length).exp());
        cumulative_hazard += combined * length;
    }

    Ok(Projection {
        absolute_risk,
        cumulative_hazard,
    })
}

/// Probability of a breast cancer diagnosis within `years` of the current age.
#[inline]
pub fn predict(factors: &RiskFactors, years: f64) -> Result<f64, ProjectionError> {
    Ok(project(factors, years)?.absolute_risk)
}
