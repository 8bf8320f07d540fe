use cbesub_core::models::{Exon, GenomicRegion, Strand};

use crate::errors::{MapperError, Result};

///
/// Map a residue of the translated CDS to the genomic bases of its codon.
///
/// # Arguments
///
/// - exons: the transcript's coding exons ordered 5'->3' along the transcript
///   (see [`cbesub_core::models::order_exons`])
/// - residue_index: 0-based residue index in the peptide
///
/// The returned region always spans three bases; its strand is the transcript's.
/// A codon split across two exons is reported as [`MapperError::SplitCodon`].
///
pub fn resolve_codon(exons: &[Exon], residue_index: usize) -> Result<GenomicRegion> {
    let codon_start = residue_index as u64 * 3;
    let mut cumulative: u64 = 0;

    for exon in exons {
        let exon_length = exon.len();

        if cumulative + exon_length >= codon_start + 3 {
            if codon_start < cumulative {
                return Err(MapperError::SplitCodon { residue_index });
            }

            let offset = codon_start - cumulative;
            let (start, end) = match exon.strand {
                Strand::Forward => (exon.start + offset, exon.start + offset + 2),
                Strand::Reverse => (exon.end - offset - 2, exon.end - offset),
            };

            return Ok(GenomicRegion {
                chrom: exon.chrom.clone(),
                start,
                end,
                strand: exon.strand,
            });
        }

        cumulative += exon_length;
    }

    Err(MapperError::OutOfRange {
        residue_index,
        cds_length: cumulative,
    })
}
