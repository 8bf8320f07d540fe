//! The standard genetic code (NCBI translation table 1).

/// Amino acids in TCAG order: first base varies slowest.
const STANDARD_CODE: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

pub const STOP: char = '*';
pub const UNKNOWN: char = 'X';

fn base_index(base: u8) -> Option<usize> {
    match base.to_ascii_uppercase() {
        b'T' | b'U' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

///
/// Translate a single codon. Stops translate to `*`.
///
/// Returns `None` when the codon is not exactly three unambiguous bases.
///
pub fn translate_codon(codon: &str) -> Option<char> {
    let bytes = codon.as_bytes();
    if bytes.len() != 3 {
        return None;
    }

    let i = base_index(bytes[0])?;
    let j = base_index(bytes[1])?;
    let k = base_index(bytes[2])?;

    Some(STANDARD_CODE[i * 16 + j * 4 + k] as char)
}

///
/// Translate a coding sequence codon by codon.
///
/// # Arguments
///
/// - cds: the spliced coding sequence
/// - to_stop: stop at, and exclude, the first stop codon
///
/// Codons containing ambiguous bases become `X`; a trailing partial codon is ignored.
///
pub fn translate(cds: &str, to_stop: bool) -> String {
    let mut peptide = String::with_capacity(cds.len() / 3);

    for chunk in cds.as_bytes().chunks_exact(3) {
        let aa = std::str::from_utf8(chunk)
            .ok()
            .and_then(translate_codon)
            .unwrap_or(UNKNOWN);

        if to_stop && aa == STOP {
            break;
        }
        peptide.push(aa);
    }

    peptide
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("ATG", 'M')]
    #[case("TGG", 'W')]
    #[case("CAA", 'Q')]
    #[case("CAG", 'Q')]
    #[case("CGA", 'R')]
    #[case("TAA", '*')]
    #[case("TAG", '*')]
    #[case("TGA", '*')]
    #[case("GGG", 'G')]
    #[case("TCA", 'S')]
    #[case("TTA", 'L')]
    #[case("ccc", 'P')]
    #[case("GCT", 'A')]
    #[case("AAG", 'K')]
    fn test_translate_codon(#[case] codon: &str, #[case] expected: char) {
        assert_eq!(translate_codon(codon), Some(expected));
    }

    #[rstest]
    #[case("NNN")]
    #[case("AT")]
    #[case("ATGC")]
    fn test_untranslatable_codon(#[case] codon: &str) {
        assert_eq!(translate_codon(codon), None);
    }

    #[rstest]
    fn test_translate_to_stop() {
        assert_eq!(translate("ATGCAGTGGTAAGGG", true), "MQW");
        assert_eq!(translate("ATGCAGTGGTAAGGG", false), "MQW*G");
    }

    #[rstest]
    fn test_translate_partial_and_ambiguous() {
        assert_eq!(translate("ATGNNNCA", true), "MX");
    }
}
