use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use cbesub_core::models::SubstrateRecord;
use cbesub_core::models::substrate::round_to;

use crate::errors::{ClassifyError, Result};
use crate::io::Prediction;

const DECIMALS: i32 = 5;

///
/// Effective-substrate summary of one transcript.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstrateDensity {
    #[serde(rename = "Total substrate")]
    pub total: usize,
    #[serde(rename = "Effective substrate")]
    pub effective: usize,
    #[serde(rename = "Peptide length")]
    pub peptide_length: usize,
    #[serde(rename = "Effective substrate density")]
    pub density: f64,
    #[serde(rename = "Mean position of Substrate")]
    pub mean_position: f64,
    /// `None` when no window is labelled positive
    #[serde(rename = "Mean position of Effective substrate")]
    pub mean_effective_position: Option<f64>,
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(round_to(values.iter().sum::<f64>() / values.len() as f64, DECIMALS))
}

impl SubstrateDensity {
    ///
    /// Join predictions to substrate records on the flanking sequence and summarise.
    ///
    /// The join is an inner, many-to-many one: a sequence predicted twice and
    /// tabulated twice contributes four rows. The peptide length is taken from
    /// the first joined row, in prediction order.
    ///
    pub fn compute(predictions: &[Prediction], records: &[SubstrateRecord]) -> Result<Self> {
        let mut by_sequence: HashMap<&str, Vec<&SubstrateRecord>> = HashMap::new();
        for record in records {
            by_sequence
                .entry(record.flanking_sequence.as_str())
                .or_default()
                .push(record);
        }

        let mut peptide_length = None;
        let mut positions = Vec::new();
        let mut effective_positions = Vec::new();

        for prediction in predictions {
            let Some(matches) = by_sequence.get(prediction.flanking_sequence.as_str()) else {
                continue;
            };
            for record in matches {
                peptide_length.get_or_insert(record.peptide_length);
                positions.push(record.relative_position);
                if prediction.pred.is_positive() {
                    effective_positions.push(record.relative_position);
                }
            }
        }

        let peptide_length = peptide_length.ok_or(ClassifyError::EmptyJoin)?;
        let total = positions.len();
        let effective = effective_positions.len();

        let density = if peptide_length == 0 {
            0.0
        } else {
            round_to(
                effective as f64 / total as f64 / peptide_length as f64,
                DECIMALS,
            )
        };

        Ok(SubstrateDensity {
            total,
            effective,
            peptide_length,
            density,
            mean_position: mean(&positions).unwrap_or(0.0),
            mean_effective_position: mean(&effective_positions),
        })
    }

    ///
    /// Write the summary as a one-row CSV with a header.
    ///
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.serialize(self)?;
        writer.flush()?;
        Ok(())
    }
}
