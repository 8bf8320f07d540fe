use cbesub_core::codon::{UNKNOWN, translate_codon};
use cbesub_core::config::EditMode;
use cbesub_core::consts::{EDITED_BASE, MUTABLE_BASE, STOP_GAIN_CODONS};

///
/// Convert every C of a codon to T.
///
pub fn edit_codon(codon: &str) -> String {
    codon
        .bytes()
        .map(|b| {
            if b.to_ascii_uppercase() == MUTABLE_BASE {
                EDITED_BASE as char
            } else {
                b.to_ascii_uppercase() as char
            }
        })
        .collect()
}

///
/// Decide whether C->T editing of a codon matters.
///
/// - `AminoAcidChange`: the codon and its fully edited product translate to
///   different amino acids (untranslatable codons count as `X`)
/// - `StopGain`: the codon is one of `CAA`, `CAG`, `CGA`
///
/// A codon without a C never qualifies.
///
pub fn codon_changes_amino_acid(codon: &str, mode: EditMode) -> bool {
    let codon = codon.to_ascii_uppercase();
    if !codon.bytes().any(|b| b == MUTABLE_BASE) {
        return false;
    }

    match mode {
        EditMode::AminoAcidChange => {
            let original = translate_codon(&codon).unwrap_or(UNKNOWN);
            let edited = translate_codon(&edit_codon(&codon)).unwrap_or(UNKNOWN);
            original != edited
        }
        EditMode::StopGain => STOP_GAIN_CODONS.contains(&codon.as_str()),
    }
}
