//! # Core models for cytosine base editor substrate extraction
//!
//! This crate holds everything the rest of the workspace shares:
//!
//! - `models` - strands, exons, genomic regions and substrate table rows
//! - `codon` - the standard genetic code and CDS translation
//! - `providers` - the sequence and annotation capabilities, plus in-memory,
//!   FASTA and exon-table implementations that work offline
//! - `config` - the TOML configuration shared by the clients and the CLI
//!
//! # Example
//!
//! ```
//! use cbesub_core::models::{GenomicRegion, Strand};
//!
//! let region: GenomicRegion = "1:100..102:-1".parse().unwrap();
//! assert_eq!(region.strand, Strand::Reverse);
//! assert_eq!(region.len(), 3);
//! ```
pub mod codon;
pub mod config;
pub mod consts;
pub mod errors;
pub mod models;
pub mod providers;
pub mod utils;

// re-exports
pub use errors::*;
pub use models::{Exon, GenomicRegion, Strand, SubstrateRecord};
pub use providers::{AnnotationProvider, SequenceProvider};
