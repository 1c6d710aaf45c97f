//! # Tabular Batch I/O
//!
//! Reads subject records from tab-separated files and writes one result row per
//! record. Column names are fixed and come from the field names below; optional
//! answers may be left empty.
//!
//! - Records that parse but fail validation are not fatal here. Their result row
//!   carries the error message in the `error` column and leaves the numbers empty.
//! - A malformed file (unknown category label, non-numeric age) is fatal and is
//!   reported with the offending line.

use crate::assess::Assessment;
use crate::error::RiskError;
use crate::input::RiskInput;
use crate::race::Race;
use crate::types::{BiopsyStatus, HyperplasiaStatus, MhtFormulation};
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("Failed to read or write a tab-separated file: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Got {results} results for {records} records.")]
    LengthMismatch { records: usize, results: usize },
}

/// One row of a batch input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub id: String,
    pub age: f64,
    pub race: Race,
    pub biopsies: BiopsyStatus,
    pub hyperplasia: Option<HyperplasiaStatus>,
    pub age_at_menarche: Option<u32>,
    #[serde(default)]
    pub nulliparous: Option<bool>,
    pub age_at_first_child: Option<u32>,
    pub relatives: Option<u32>,
    pub mht: Option<MhtFormulation>,
}

impl BatchRecord {
    pub fn to_input(&self) -> RiskInput {
        RiskInput {
            age: self.age,
            race: self.race,
            biopsies: self.biopsies,
            hyperplasia: self.hyperplasia.unwrap_or(HyperplasiaStatus::Unknown),
            age_at_menarche: self.age_at_menarche,
            nulliparous: self.nulliparous.unwrap_or(false),
            age_at_first_child: self.age_at_first_child,
            relatives: self.relatives,
            family_history: None,
            mht: self.mht.unwrap_or_default(),
        }
    }
}

/// One row of a batch output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub id: String,
    pub relative_risk: Option<f64>,
    pub absolute_risk: Option<f64>,
    pub mht_relative_risk: Option<f64>,
    pub error: Option<String>,
}

impl ResultRow {
    pub fn new(id: &str, result: &Result<Assessment, RiskError>) -> Self {
        match result {
            Ok(assessment) => Self {
                id: id.to_string(),
                relative_risk: Some(assessment.relative_risk),
                absolute_risk: Some(assessment.absolute_risk),
                mht_relative_risk: Some(assessment.mht_relative_risk),
                error: None,
            },
            Err(e) => Self {
                id: id.to_string(),
                relative_risk: None,
                absolute_risk: None,
                mht_relative_risk: None,
                error: Some(e.to_string()),
            },
        }
    }
}

pub fn read_records(path: &Path) -> Result<Vec<BatchRecord>, IoError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .trim(csv::Trim::All)
        .from_path(path)?;
    let records = reader
        .deserialize()
        .collect::<Result<Vec<BatchRecord>, csv::Error>>()?;
    log::debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

pub fn write_results(
    path: &Path,
    records: &[BatchRecord],
    results: &[Result<Assessment, RiskError>],
) -> Result<(), IoError> {
    if records.len() != results.len() {
        return Err(IoError::LengthMismatch {
            records: records.len(),
            results: results.len(),
        });
    }
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(BufWriter::new(File::create(path)?));
    for (record, result) in records.iter().zip(results) {
        writer.serialize(ResultRow::new(&record.id, result))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::absolute::ProjectionError;
    use std::fs;
    use tempfile::tempdir;

    const HEADER: &str = "id\tage\trace\tbiopsies\thyperplasia\tage_at_menarche\tnulliparous\tage_at_first_child\trelatives\tmht";

    #[test]
    fn reads_optional_columns_as_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("subjects.tsv");
        fs::write(
            &path,
            format!(
                "{HEADER}\n\
                 a\t45.2\twhite_other\tone\t\t11\tfalse\t22\t1\t\n\
                 b\t52\tchinese\tmultiple\tatypical\t\ttrue\t\t\tcombined\n"
            ),
        )
        .unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);

        let a = records[0].to_input();
        assert_eq!(a.race, Race::WhiteOther);
        assert_eq!(a.hyperplasia, HyperplasiaStatus::Unknown);
        assert_eq!(a.age_at_menarche, Some(11));
        assert_eq!(a.mht, MhtFormulation::None);

        let b = records[1].to_input();
        assert_eq!(b.hyperplasia, HyperplasiaStatus::Atypical);
        assert!(b.nulliparous);
        assert_eq!(b.age_at_first_child, None);
        assert_eq!(b.number_of_relatives(), None);
        assert_eq!(b.mht, MhtFormulation::Combined);
    }

    #[test]
    fn blank_nulliparous_cell_means_parous() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blank.tsv");
        fs::write(
            &path,
            format!("{HEADER}\nx\t45.2\twhite\tnone\t\t\t\t22\t1\t\n"),
        )
        .unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records[0].nulliparous, None);
        let input = records[0].to_input();
        assert!(!input.nulliparous);
        assert_eq!(input.age_at_first_child, Some(22));
        assert_eq!(input.validate(), Ok(()));
    }

    #[test]
    fn unknown_label_is_a_file_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.tsv");
        fs::write(
            &path,
            format!("{HEADER}\nx\t40\tmartian\tnone\t\t\tfalse\t\t\t\n"),
        )
        .unwrap();
        assert!(matches!(read_records(&path), Err(IoError::Csv(_))));
    }

    #[test]
    fn failed_records_carry_their_message() {
        let ok = Assessment {
            age: 45.2,
            horizon_years: 5.0,
            relative_risk: 2.5,
            absolute_risk: 0.02,
            mht_relative_risk: 1.0,
        };
        let failed: Result<Assessment, RiskError> =
            Err(ProjectionError::InvalidHorizon(-1.0).into());

        let row = ResultRow::new("ok", &Ok(ok));
        assert_eq!(row.absolute_risk, Some(0.02));
        assert_eq!(row.error, None);

        let row = ResultRow::new("bad", &failed);
        assert_eq!(row.absolute_risk, None);
        assert!(row.error.unwrap().contains("horizon"));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        let records = vec![BatchRecord {
            id: "a".to_string(),
            age: 40.0,
            race: Race::White,
            biopsies: BiopsyStatus::None,
            hyperplasia: None,
            age_at_menarche: None,
            nulliparous: None,
            age_at_first_child: None,
            relatives: None,
            mht: None,
        }];
        assert!(matches!(
            write_results(&path, &records, &[]),
            Err(IoError::LengthMismatch { records: 1, results: 0 })
        ));
    }
}
