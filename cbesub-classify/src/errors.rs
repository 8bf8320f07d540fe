use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Unknown label '{0}', expected LABEL_0 or LABEL_1")]
    UnknownLabel(String),

    #[error("No label available for sequence {0}")]
    UnlabelledSequence(String),

    #[error("Got {labels} labels for {sequences} sequences")]
    LengthMismatch { sequences: usize, labels: usize },

    #[error("No flanking sequence is shared between the predictions and the substrate table")]
    EmptyJoin,

    #[error("Input file contains no rows: {0}")]
    EmptyInput(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
