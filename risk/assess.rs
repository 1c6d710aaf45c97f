use crate::absolute;
use crate::config::EngineConfig;
use crate::error::RiskError;
use crate::factors::RiskFactors;
use crate::input::RiskInput;
use crate::mht;
use crate::relative;
use serde::{Deserialize, Serialize};

/// Risk estimates for one subject over one horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub age: f64,
    pub horizon_years: f64,
    /// Gail relative risk evaluated at the current age.
    pub relative_risk: f64,
    /// Background probability of a diagnosis within the horizon.
    pub absolute_risk: f64,
    /// Relative risk of the reported hormone therapy, separate from the Gail estimate.
    pub mht_relative_risk: f64,
}

/// Runs the whole chain for one subject: validation, recoding and both calculators.
pub fn assess(
    input: &RiskInput,
    years: f64,
    config: &EngineConfig,
) -> Result<Assessment, RiskError> {
    let factors = RiskFactors::from_input(input, &config.ages)?;
    let absolute_risk = absolute::predict(&factors, years)?;
    Ok(Assessment {
        age: factors.age(),
        horizon_years: years,
        relative_risk: relative::relative_risk(&factors, factors.age()),
        absolute_risk,
        mht_relative_risk: mht::relative_risk(input.mht),
    })
}
