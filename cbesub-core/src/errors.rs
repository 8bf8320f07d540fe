use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid strand: {0}. Expected one of 1, +1, +, -1, -")]
    InvalidStrand(String),

    #[error("Invalid exon coordinates {start}..{end}: start must be >= 1 and <= end")]
    InvalidExon { start: u64, end: u64 },

    #[error("Error parsing region: {0}")]
    RegionParseError(String),

    #[error("Exons of one transcript must share a single strand")]
    MixedStrand,

    #[error("Transcript has no exons")]
    EmptyExonSet,
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("No exon annotation found for transcript {0}")]
    MissingAnnotation(String),

    #[error("Unable to retrieve sequence for region {0}")]
    MissingSequence(String),

    #[error("HTTP status {status} when fetching {url}")]
    Http { url: String, status: u16 },

    #[error("Request error when fetching {url}: {msg}")]
    Request { url: String, msg: String },

    #[error("Unexpected response payload: {0}")]
    Payload(String),

    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
