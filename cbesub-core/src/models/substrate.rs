use serde::{Deserialize, Serialize};

///
/// One row of a transcript's substrate table: a 40-nt flanking window and the
/// residue it was extracted for.
///
/// Column names follow the table layout the density step reads back.
///
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SubstrateRecord {
    pub flanking_sequence: String,
    pub amino_acid: char,
    pub codon: String,
    /// 0-based residue index in the peptide
    #[serde(rename = "pos")]
    pub residue_position: usize,
    /// translated peptide length
    #[serde(rename = "amino_acid_len")]
    pub peptide_length: usize,
    /// `residue_position / peptide_length`, rounded to 5 decimals
    #[serde(rename = "rel_amino_acid_pos")]
    pub relative_position: f64,
}

impl SubstrateRecord {
    pub fn new(
        flanking_sequence: String,
        amino_acid: char,
        codon: String,
        residue_position: usize,
        peptide_length: usize,
    ) -> Self {
        let relative_position = relative_position(residue_position, peptide_length);
        SubstrateRecord {
            flanking_sequence,
            amino_acid,
            codon,
            residue_position,
            peptide_length,
            relative_position,
        }
    }
}

///
/// Position of a residue relative to the peptide length, in [0, 1].
///
pub fn relative_position(residue_position: usize, peptide_length: usize) -> f64 {
    if peptide_length == 0 {
        return 0.0;
    }
    round_to(residue_position as f64 / peptide_length as f64, 5)
}

///
/// Round to a fixed number of decimal places.
///
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(0, 10, 0.0)]
    #[case(5, 10, 0.5)]
    #[case(1, 3, 0.33333)]
    #[case(2, 3, 0.66667)]
    #[case(3, 0, 0.0)]
    #[case(1, 64, 0.01562)]
    #[case(5, 64, 0.07812)]
    #[case(3, 64, 0.04688)]
    fn test_relative_position(#[case] pos: usize, #[case] len: usize, #[case] expected: f64) {
        assert_eq!(relative_position(pos, len), expected);
    }

    #[rstest]
    fn test_record_carries_relative_position() {
        let record = SubstrateRecord::new("A".repeat(40), 'Q', "CAG".to_string(), 7, 70);
        assert_eq!(record.relative_position, 0.1);
    }
}
