use std::path::Path;

use serde::{Deserialize, Serialize};

use cbesub_core::models::SubstrateRecord;

use crate::errors::{ClassifyError, Result};
use crate::label::Label;

///
/// One row of a prediction file: `flanking_sequence,pred`.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub flanking_sequence: String,
    pub pred: Label,
}

///
/// Read substrate windows, one per line, taking the first column of each
/// non-empty row. The file has no header.
///
pub fn read_targets(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut targets = Vec::new();
    for result in reader.records() {
        let record = result?;
        match record.get(0).map(str::trim) {
            Some(seq) if !seq.is_empty() => targets.push(seq.to_string()),
            _ => continue,
        }
    }

    if targets.is_empty() {
        return Err(ClassifyError::EmptyInput(path.display().to_string()));
    }
    Ok(targets)
}

///
/// Write `flanking_sequence,pred` rows, one per sequence.
///
pub fn write_predictions(path: &Path, sequences: &[String], labels: &[Label]) -> Result<()> {
    if sequences.len() != labels.len() {
        return Err(ClassifyError::LengthMismatch {
            sequences: sequences.len(),
            labels: labels.len(),
        });
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["flanking_sequence", "pred"])?;
    for (seq, label) in sequences.iter().zip(labels) {
        writer.write_record([seq.as_str(), &label.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_predictions(path: &Path) -> Result<Vec<Prediction>> {
    let mut reader = csv::Reader::from_path(path)?;
    let predictions = reader
        .deserialize()
        .collect::<std::result::Result<Vec<Prediction>, csv::Error>>()?;
    Ok(predictions)
}

///
/// Read a transcript's `table.csv`.
///
pub fn read_table(path: &Path) -> Result<Vec<SubstrateRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<SubstrateRecord>, csv::Error>>()?;
    Ok(records)
}
