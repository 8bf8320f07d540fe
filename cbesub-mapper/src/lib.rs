//! # Coordinate mapping and substrate extraction
//!
//! Given a transcript's coding exons, this crate maps a residue of the
//! translated peptide back to the three genomic bases of its codon and cuts
//! the 40-nt window around the codon's editable cytosine, oriented so that
//! the cytosine always sits at index 20.
//!
//! # Known limitation
//!
//! The resolver assumes a codon never spans two exons. Split codons are
//! reported as [`MapperError::SplitCodon`] and skipped by the extraction
//! pipeline rather than mapped.
//!
//! # Example
//!
//! ```
//! use cbesub_core::models::{Exon, Strand};
//! use cbesub_mapper::{flanking_window, resolve_codon};
//!
//! let exons = vec![Exon::new("chr1", 100, 109, Strand::Forward).unwrap()];
//! let codon = resolve_codon(&exons, 0).unwrap();
//! assert_eq!((codon.start, codon.end), (100, 102));
//!
//! let window = flanking_window(&codon, "TCA").unwrap();
//! assert_eq!(window.mutable_position, 101);
//! assert_eq!((window.region.start, window.region.end), (81, 120));
//! ```
pub mod cds;
pub mod errors;
pub mod extract;
pub mod filter;
pub mod flank;
pub mod mapping_log;
pub mod resolver;
pub mod scan;

// re-exports
pub use cds::CodingSequence;
pub use errors::*;
pub use extract::{TranscriptSubstrates, extract_substrates};
pub use filter::codon_changes_amino_acid;
pub use flank::{FlankWindow, fetch_flank, flanking_window};
pub use mapping_log::MappingLog;
pub use resolver::resolve_codon;
pub use scan::{scan_cdna_file, scan_cdna_substrates, write_substrates};
