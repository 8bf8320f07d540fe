//! # Remote collaborators for cbesub
//!
//! Blocking HTTP clients for the two public services the extraction workflow
//! depends on:
//!
//! - [`EnsemblClient`] - coding exon mappings and genomic sequence, exposed
//!   through the `AnnotationProvider` and `SequenceProvider` traits
//! - [`TogoIdClient`] - batched identifier conversion
//!
//! Calls are made one at a time with a fixed delay between them and are never
//! retried; any non-2xx response is returned as an error.
pub mod ensembl;
pub mod http;
pub mod throttle;
pub mod togoid;

// re-exports
pub use ensembl::EnsemblClient;
pub use throttle::Throttle;
pub use togoid::{IdMapping, TogoIdClient, read_identifiers};
