use thiserror::Error;

use cbesub_core::errors::{ModelError, ProviderError};

#[derive(Error, Debug)]
pub enum MapperError {
    #[error(
        "Residue position {residue_index} out of range for the provided exon regions (CDS length {cds_length} nt)"
    )]
    OutOfRange { residue_index: usize, cds_length: u64 },

    #[error("Codon of residue {residue_index} spans an exon boundary")]
    SplitCodon { residue_index: usize },

    #[error("Flanking window {region} does not put C at index 20: {sequence}")]
    FlankMismatch { region: String, sequence: String },

    #[error("Exon {region} returned {actual} bases, expected {expected}")]
    CdsLengthMismatch {
        region: String,
        expected: u64,
        actual: usize,
    },

    #[error("Codon {codon} of residue {residue_index} translates to {actual}, peptide has {expected}")]
    TranslationMismatch {
        residue_index: usize,
        codon: String,
        expected: char,
        actual: char,
    },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MapperError>;
