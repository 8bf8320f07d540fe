//! # cbesub
//!
//! Finds the genomic substrates of cytosine base editors in protein-coding
//! transcripts: each residue whose codon a C->T edit would change is mapped
//! back to the genome and reported as the 40-nt window that places the edited
//! cytosine at index 20.
//!
//! The functionality lives in member crates, re-exported here behind features:
//!
//! - `core`: strands, exons, regions, the genetic code and sequence providers
//! - `fetch`: Ensembl REST and TogoID clients
//! - `mapper`: residue-to-codon resolution, flanking windows and extraction
//! - `classify`: substrate labelling and effective-substrate density
#[cfg(feature = "core")]
#[doc(inline)]
pub use cbesub_core as core;

#[cfg(feature = "fetch")]
#[doc(inline)]
pub use cbesub_fetch as fetch;

#[cfg(feature = "mapper")]
#[doc(inline)]
pub use cbesub_mapper as mapper;

#[cfg(feature = "classify")]
#[doc(inline)]
pub use cbesub_classify as classify;
