//! # Substrate classification and density
//!
//! Labels 40-nt substrate windows as effective (`LABEL_1`) or not (`LABEL_0`)
//! and summarises a transcript's labelled windows as an effective-substrate
//! density.
//!
//! Two classifiers are provided: a rule on the ACW motif around the mutable
//! cytosine, and [`PrecomputedLabels`], which serves labels produced by an
//! external model.
//!
//! # Example
//!
//! ```
//! use cbesub_classify::{AcwMotifClassifier, Label, SequenceClassifier};
//!
//! let window = format!("{}ACA{}", "G".repeat(19), "G".repeat(18));
//! let labels = AcwMotifClassifier.classify(&[window]).unwrap();
//! assert_eq!(labels, vec![Label::Positive]);
//! ```
pub mod classifier;
pub mod density;
pub mod errors;
pub mod io;
pub mod label;

// re-exports
pub use classifier::{AcwMotifClassifier, PrecomputedLabels, SequenceClassifier, classify_all};
pub use density::SubstrateDensity;
pub use errors::*;
pub use io::{Prediction, read_predictions, read_table, read_targets, write_predictions};
pub use label::Label;
