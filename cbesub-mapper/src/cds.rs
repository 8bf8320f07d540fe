use cbesub_core::codon::{UNKNOWN, translate, translate_codon};
use cbesub_core::models::{Exon, order_exons};
use cbesub_core::providers::SequenceProvider;

use crate::errors::{MapperError, Result};
use crate::mapping_log::MappingLog;

///
/// The spliced coding sequence of a transcript and its translation.
///
#[derive(Debug, Clone)]
pub struct CodingSequence {
    pub transcript_id: String,
    /// exons ordered 5'->3' along the transcript
    pub exons: Vec<Exon>,
    pub sequence: String,
    /// translation up to, not including, the first stop codon
    pub peptide: String,
}

impl CodingSequence {
    ///
    /// Build the CDS by fetching and concatenating each exon in transcript order.
    ///
    /// # Arguments
    ///
    /// - transcript_id: used for logging only
    /// - exons: the transcript's coding exons, in any order
    /// - provider: where exon sequences come from
    /// - log: receives one entry per exon
    ///
    pub fn assemble<P: SequenceProvider + ?Sized>(
        transcript_id: &str,
        exons: &[Exon],
        provider: &P,
        log: &mut MappingLog,
    ) -> Result<Self> {
        let exons = order_exons(exons)?;
        let mut sequence = String::new();

        for (number, exon) in exons.iter().enumerate() {
            let region = exon.region();
            let exon_sequence = provider.sequence(&region)?;

            log.record(format!("Exon {} region: {}", number + 1, region));
            log.record(format!("Exon {} sequence: {}", number + 1, exon_sequence));

            if exon_sequence.len() as u64 != exon.len() {
                return Err(MapperError::CdsLengthMismatch {
                    region: region.to_string(),
                    expected: exon.len(),
                    actual: exon_sequence.len(),
                });
            }
            sequence.push_str(&exon_sequence);
        }

        let peptide = translate(&sequence, true);
        log.record(format!("{} CDS: {}", transcript_id, sequence));
        log.record(format!(
            "{} peptide ({} aa): {}",
            transcript_id,
            peptide.len(),
            peptide
        ));

        Ok(CodingSequence {
            transcript_id: transcript_id.to_string(),
            exons,
            sequence,
            peptide,
        })
    }

    pub fn peptide_length(&self) -> usize {
        self.peptide.len()
    }

    ///
    /// The codon of a residue, if the residue is inside the CDS.
    ///
    pub fn codon(&self, residue_index: usize) -> Option<&str> {
        let start = residue_index * 3;
        self.sequence.get(start..start + 3)
    }

    ///
    /// Check that the CDS bookkeeping agrees with the translation: the peptide
    /// fits in the CDS and every residue's codon translates back to it.
    ///
    pub fn verify_translation(&self) -> Result<()> {
        for (residue_index, expected) in self.peptide.chars().enumerate() {
            let codon = self.codon(residue_index).ok_or(MapperError::OutOfRange {
                residue_index,
                cds_length: self.sequence.len() as u64,
            })?;
            let actual = translate_codon(codon).unwrap_or(UNKNOWN);
            if actual != expected {
                return Err(MapperError::TranslationMismatch {
                    residue_index,
                    codon: codon.to_string(),
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}
