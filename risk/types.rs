// ========================================================================================
//                             High-Level Data Contracts
// ========================================================================================

// This file is ONLY for types that are SHARED BETWEEN FILES, not types that only are used in one file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of breast biopsies reported by the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiopsyStatus {
    None,
    One,
    Multiple,
    Unknown,
}

/// Whether any biopsy showed atypical hyperplasia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HyperplasiaStatus {
    None,
    Atypical,
    Unknown,
}

/// Menopausal hormone therapy formulation being considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MhtFormulation {
    #[default]
    None,
    Oestrogen,
    Combined,
}

impl fmt::Display for BiopsyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BiopsyStatus::None => "none",
            BiopsyStatus::One => "one",
            BiopsyStatus::Multiple => "multiple",
            BiopsyStatus::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

impl fmt::Display for HyperplasiaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HyperplasiaStatus::None => "none",
            HyperplasiaStatus::Atypical => "atypical",
            HyperplasiaStatus::Unknown => "unknown",
        };
        f.write_str(label)
    }
}
