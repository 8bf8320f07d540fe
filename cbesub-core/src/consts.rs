/// Width of the flanking window handed to substrate classifiers.
pub const FLANK_WIDTH: u64 = 40;

/// 0-based index of the mutable cytosine inside a full-width flanking window.
pub const MUTABLE_BASE_OFFSET: usize = 20;

/// The base a cytosine base editor deaminates.
pub const MUTABLE_BASE: u8 = b'C';

/// What the mutable base becomes after editing.
pub const EDITED_BASE: u8 = b'T';

/// Codons that become stop codons after a single C->T edit.
pub const STOP_GAIN_CODONS: [&str; 3] = ["CAA", "CAG", "CGA"];

pub const DEFAULT_ENSEMBL_SERVER: &str = "https://rest.ensembl.org";
pub const DEFAULT_ENSEMBL_SPECIES: &str = "human";
pub const DEFAULT_ENSEMBL_DELAY_MS: u64 = 100;

pub const DEFAULT_TOGOID_SERVER: &str = "https://api.togoid.dbcls.jp";
pub const DEFAULT_TOGOID_BATCH_SIZE: usize = 500;
pub const DEFAULT_TOGOID_DELAY_MS: u64 = 500;
