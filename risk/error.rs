use crate::absolute::ProjectionError;
use crate::factors::FactorError;
use crate::input::InputError;
use crate::recode::RecodingError;
use thiserror::Error;

/// Any failure on the path from raw answers to a risk estimate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RiskError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),
    #[error("Contradictory risk factors: {0}")]
    Recoding(#[from] RecodingError),
    #[error("Risk factors out of range: {0}")]
    Factor(#[from] FactorError),
    #[error("Cannot project risk: {0}")]
    Projection(#[from] ProjectionError),
}
