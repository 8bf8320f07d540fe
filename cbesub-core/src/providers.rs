//! Sequence and annotation capabilities.
//!
//! The mapping and extraction code only ever talks to these two traits, so it
//! can run against the remote Ensembl clients or against the offline
//! implementations below.

use std::collections::HashMap;
use std::path::Path;

use bio::alphabets::dna::revcomp;
use bio::io::fasta;
use log::{debug, info};
use serde::Deserialize;

use crate::errors::ProviderError;
use crate::models::{Exon, GenomicRegion, Strand};
use crate::utils::get_dynamic_reader;

///
/// Something that can return the nucleotide sequence of a genomic region.
///
pub trait SequenceProvider {
    ///
    /// Get the uppercase sequence of a region, reverse-complemented when the
    /// region is on the reverse strand.
    ///
    fn sequence(&self, region: &GenomicRegion) -> Result<String, ProviderError>;
}

///
/// Something that can return the coding exons of a transcript.
///
pub trait AnnotationProvider {
    ///
    /// Get the CDS-bearing exon segments of a transcript, in any order.
    /// An unknown transcript or an empty exon list is an error.
    ///
    fn coding_exons(&self, transcript_id: &str) -> Result<Vec<Exon>, ProviderError>;
}

impl<T: SequenceProvider + ?Sized> SequenceProvider for &T {
    fn sequence(&self, region: &GenomicRegion) -> Result<String, ProviderError> {
        (**self).sequence(region)
    }
}

impl<T: AnnotationProvider + ?Sized> AnnotationProvider for &T {
    fn coding_exons(&self, transcript_id: &str) -> Result<Vec<Exon>, ProviderError> {
        (**self).coding_exons(transcript_id)
    }
}

///
/// Chromosome sequences held in memory.
///
#[derive(Debug, Default, Clone)]
pub struct GenomeSequences {
    seq_map: HashMap<String, Vec<u8>>,
}

impl GenomeSequences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, chrom: &str, seq: &str) {
        self.seq_map
            .insert(chrom.to_string(), seq.as_bytes().to_ascii_uppercase());
    }

    pub fn contains_chr(&self, chrom: &str) -> bool {
        self.lookup(chrom).is_some()
    }

    pub fn len(&self) -> usize {
        self.seq_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq_map.is_empty()
    }

    // Ensembl names chromosomes `1`, UCSC `chr1`; accept either.
    fn lookup(&self, chrom: &str) -> Option<&Vec<u8>> {
        self.seq_map.get(chrom).or_else(|| match chrom.strip_prefix("chr") {
            Some(bare) => self.seq_map.get(bare),
            None => self.seq_map.get(&format!("chr{}", chrom)),
        })
    }

    ///
    /// Load every record of a (optionally gzipped) FASTA file.
    ///
    pub fn from_fasta(path: &Path) -> Result<Self, ProviderError> {
        let reader = get_dynamic_reader(path)
            .map_err(|e| ProviderError::FileReadError(format!("{}: {}", path.display(), e)))?;

        let mut genome = GenomeSequences::new();
        for record in fasta::Reader::new(reader).records() {
            let record = record.map_err(|e| {
                ProviderError::FileReadError(format!("{}: {}", path.display(), e))
            })?;
            debug!("Loaded {} ({} bp)", record.id(), record.seq().len());
            genome
                .seq_map
                .insert(record.id().to_string(), record.seq().to_ascii_uppercase());
        }

        if genome.is_empty() {
            return Err(ProviderError::FileReadError(format!(
                "{}: no FASTA records found",
                path.display()
            )));
        }

        info!("Loaded {} sequences from {}", genome.len(), path.display());
        Ok(genome)
    }
}

impl SequenceProvider for GenomeSequences {
    fn sequence(&self, region: &GenomicRegion) -> Result<String, ProviderError> {
        let missing = || ProviderError::MissingSequence(region.to_string());

        let seq = self.lookup(&region.chrom).ok_or_else(missing)?;
        if region.start == 0 || region.start > region.end || region.end as usize > seq.len() {
            return Err(missing());
        }

        let slice = &seq[(region.start - 1) as usize..region.end as usize];
        let oriented = match region.strand {
            Strand::Forward => slice.to_vec(),
            Strand::Reverse => revcomp(slice),
        };

        String::from_utf8(oriented).map_err(|_| missing())
    }
}

#[derive(Debug, Deserialize)]
struct ExonRow {
    transcript_id: String,
    chrom: String,
    start: u64,
    end: u64,
    strand: String,
}

///
/// Transcript-to-exon annotation held in memory.
///
#[derive(Debug, Default, Clone)]
pub struct ExonTable {
    exons: HashMap<String, Vec<Exon>>,
}

impl ExonTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, transcript_id: &str, exon: Exon) {
        self.exons
            .entry(transcript_id.to_string())
            .or_default()
            .push(exon);
    }

    pub fn len(&self) -> usize {
        self.exons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exons.is_empty()
    }

    ///
    /// Load a tab-separated exon table with the header
    /// `transcript_id  chrom  start  end  strand`.
    ///
    pub fn from_tsv(path: &Path) -> Result<Self, ProviderError> {
        let file_err = |e: &dyn std::fmt::Display| {
            ProviderError::FileReadError(format!("{}: {}", path.display(), e))
        };

        let reader = get_dynamic_reader(path).map_err(|e| file_err(&e))?;
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut table = ExonTable::new();
        for row in csv_reader.deserialize::<ExonRow>() {
            let row = row.map_err(|e| file_err(&e))?;
            let strand = row.strand.parse::<Strand>().map_err(|e| file_err(&e))?;
            let exon =
                Exon::new(&row.chrom, row.start, row.end, strand).map_err(|e| file_err(&e))?;
            table.insert(&row.transcript_id, exon);
        }

        if table.is_empty() {
            return Err(file_err(&"no exon rows found"));
        }

        info!(
            "Loaded exons for {} transcripts from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }
}

impl AnnotationProvider for ExonTable {
    fn coding_exons(&self, transcript_id: &str) -> Result<Vec<Exon>, ProviderError> {
        match self.exons.get(transcript_id) {
            Some(exons) if !exons.is_empty() => Ok(exons.clone()),
            _ => Err(ProviderError::MissingAnnotation(transcript_id.to_string())),
        }
    }
}
