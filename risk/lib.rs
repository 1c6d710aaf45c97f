#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(unused_variables)]

pub mod absolute;
pub mod assess;
pub mod batch;
pub mod config;
pub mod error;
pub mod factors;
pub mod input;
pub mod io;
pub mod mht;
pub mod parameters;
pub mod race;
pub mod recode;
pub mod relative;
pub mod types;

pub use absolute::{Projection, ProjectionError, predict, project};
pub use assess::{Assessment, assess};
pub use config::EngineConfig;
pub use error::RiskError;
pub use factors::RiskFactors;
pub use input::RiskInput;
pub use race::{Race, RaceCategory};
pub use relative::relative_risk;
