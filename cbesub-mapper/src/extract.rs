use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{info, warn};

use cbesub_core::config::EditMode;
use cbesub_core::models::SubstrateRecord;
use cbesub_core::providers::{AnnotationProvider, SequenceProvider};
use cbesub_core::utils::progress_bar;

use crate::cds::CodingSequence;
use crate::errors::{MapperError, Result};
use crate::filter::codon_changes_amino_acid;
use crate::flank::{fetch_flank, flanking_window};
use crate::mapping_log::MappingLog;
use crate::resolver::resolve_codon;

pub const LOG_FILE: &str = "log.txt";
pub const TARGET_FILE: &str = "target.csv";
pub const TABLE_FILE: &str = "table.csv";

///
/// Every substrate window found in one transcript.
///
#[derive(Debug, Clone)]
pub struct TranscriptSubstrates {
    pub transcript_id: String,
    pub cds: CodingSequence,
    pub records: Vec<SubstrateRecord>,
    pub log: MappingLog,
    /// residues that passed the filter but could not be mapped to a clean window
    pub skipped: usize,
}

impl TranscriptSubstrates {
    pub fn flanking_sequences(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.flanking_sequence.as_str())
    }

    ///
    /// Write `log.txt`, `target.csv` and `table.csv` into `dir`, creating it if needed.
    ///
    pub fn write_to_dir(&self, dir: &Path) -> Result<()> {
        create_dir_all(dir)?;

        self.log.write_to_file(&dir.join(LOG_FILE))?;
        self.write_targets(&dir.join(TARGET_FILE))?;
        self.write_table(&dir.join(TABLE_FILE))?;

        info!(
            "Wrote {} substrates for {} to {}",
            self.records.len(),
            self.transcript_id,
            dir.display()
        );
        Ok(())
    }

    fn write_targets(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for flank in self.flanking_sequences() {
            writeln!(writer, "{}", flank)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_table(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        if self.records.is_empty() {
            writer.write_record([
                "flanking_sequence",
                "amino_acid",
                "codon",
                "pos",
                "amino_acid_len",
                "rel_amino_acid_pos",
            ])?;
        }
        for record in &self.records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

///
/// Find the substrate windows of every residue whose codon an edit would change.
///
/// # Arguments
///
/// - transcript_id: the transcript to scan
/// - annotation: source of the transcript's coding exons
/// - sequences: source of exon and window sequences
/// - mode: which codons qualify, see [`codon_changes_amino_acid`]
///
/// Residues are skipped (and logged) when their codon spans an exon boundary or
/// their window cannot place a C at index 20. A residue outside the exons, or
/// any provider failure, aborts the transcript.
///
pub fn extract_substrates<A, S>(
    transcript_id: &str,
    annotation: &A,
    sequences: &S,
    mode: EditMode,
) -> Result<TranscriptSubstrates>
where
    A: AnnotationProvider + ?Sized,
    S: SequenceProvider + ?Sized,
{
    let mut log = MappingLog::new();

    let exons = annotation.coding_exons(transcript_id)?;
    let cds = CodingSequence::assemble(transcript_id, &exons, sequences, &mut log)?;
    cds.verify_translation()?;

    let peptide_length = cds.peptide_length();
    log.record(format!(
        "Scanning {} residues for codons where C->T editing matters ({})",
        peptide_length, mode
    ));

    let mut records = Vec::new();
    let mut skipped = 0;

    let pb = progress_bar(peptide_length as u64, format!("Scanning {}", transcript_id));
    for (position, amino_acid) in cds.peptide.chars().enumerate() {
        pb.inc(1);

        let codon = match cds.codon(position) {
            Some(codon) if codon_changes_amino_acid(codon, mode) => codon,
            _ => continue,
        };

        log.record(format!(
            "Residue {} ({}) codon {} qualifies",
            position + 1,
            amino_acid,
            codon
        ));

        let codon_region = match resolve_codon(&cds.exons, position) {
            Ok(region) => region,
            Err(MapperError::SplitCodon { .. }) => {
                warn!(
                    "{}: codon of residue {} spans an exon boundary, skipping",
                    transcript_id,
                    position + 1
                );
                log.record("  skipped: codon spans an exon boundary");
                skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let window = match flanking_window(&codon_region, codon) {
            Some(window) => window,
            None => continue,
        };

        let flank = match fetch_flank(sequences, &window) {
            Ok(flank) => flank,
            Err(MapperError::FlankMismatch { region, sequence }) => {
                warn!(
                    "{}: window {} of residue {} has no C at index 20, skipping",
                    transcript_id,
                    region,
                    position + 1
                );
                log.record(format!("  skipped: window {} gave '{}'", region, sequence));
                skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let record = SubstrateRecord::new(
            flank,
            amino_acid,
            codon.to_string(),
            position,
            peptide_length,
        );

        log.record(format!("  codon region: {}", codon_region));
        log.record(format!("  substrate region: {}", window.region));
        log.record(format!("  substrate sequence: {}", record.flanking_sequence));
        log.record(format!(
            "  relative position [0-1]: {}",
            record.relative_position
        ));

        records.push(record);
    }
    pb.finish_and_clear();

    info!(
        "{}: {} substrates from {} residues ({} skipped)",
        transcript_id,
        records.len(),
        peptide_length,
        skipped
    );

    Ok(TranscriptSubstrates {
        transcript_id: transcript_id.to_string(),
        cds,
        records,
        log,
        skipped,
    })
}
