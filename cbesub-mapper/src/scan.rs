use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;

use cbesub_core::consts::{FLANK_WIDTH, MUTABLE_BASE, MUTABLE_BASE_OFFSET};
use cbesub_core::utils::read_to_string_nonempty;

fn is_nucleotide(b: u8) -> bool {
    matches!(b, b'A' | b'C' | b'G' | b'T')
}

///
/// Strip FASTA header lines and whitespace, uppercasing what is left.
///
fn clean_cdna(text: &str) -> Vec<u8> {
    text.lines()
        .filter(|line| !line.trim_start().starts_with('>'))
        .flat_map(|line| line.bytes())
        .filter(|b| !b.is_ascii_whitespace())
        .map(|b| b.to_ascii_uppercase())
        .collect()
}

///
/// Every 40-nt window of a cDNA with a C at index 20.
///
/// Windows overlap and are returned in order of position. A window containing
/// anything other than `ACGT` is not reported.
///
/// # Example
///
/// ```
/// use cbesub_mapper::scan_cdna_substrates;
///
/// let cdna = format!(">tx\n{}C{}", "A".repeat(20), "G".repeat(19));
/// let windows = scan_cdna_substrates(&cdna);
/// assert_eq!(windows.len(), 1);
/// assert_eq!(windows[0].as_bytes()[20], b'C');
/// ```
///
pub fn scan_cdna_substrates(text: &str) -> Vec<String> {
    let cdna = clean_cdna(text);
    let width = FLANK_WIDTH as usize;

    cdna.windows(width)
        .filter(|w| w[MUTABLE_BASE_OFFSET] == MUTABLE_BASE && w.iter().all(|&b| is_nucleotide(b)))
        .map(|w| String::from_utf8_lossy(w).into_owned())
        .collect()
}

///
/// Read a cDNA file (FASTA or raw sequence) and scan it.
///
pub fn scan_cdna_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = read_to_string_nonempty(path)?;
    Ok(scan_cdna_substrates(&text))
}

///
/// Write one window per line, without a header.
///
pub fn write_substrates(path: &Path, substrates: &[String]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for substrate in substrates {
        writeln!(writer, "{}", substrate)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::fs::read_to_string;
    use tempfile::tempdir;

    #[rstest]
    fn test_single_centered_c() {
        let cdna = format!("{}C{}", "A".repeat(20), "G".repeat(19));
        let windows = scan_cdna_substrates(&cdna);
        assert_eq!(windows, vec![cdna]);
    }

    #[rstest]
    fn test_overlapping_windows_in_order() {
        // Cs at 0-based 20 and 21 give two windows starting at 0 and 1
        let cdna = format!("{}CC{}", "A".repeat(20), "T".repeat(19));
        let windows = scan_cdna_substrates(&cdna);
        assert_eq!(windows.len(), 2);
        assert_eq!(&windows[0][..21], &cdna[..21]);
        assert_eq!(windows[1], cdna[1..41]);
    }

    #[rstest]
    fn test_headers_and_case_are_ignored() {
        let text = format!(">tx1 desc\n{}\n{}c\n{}\n", "a".repeat(10), "a".repeat(10), "g".repeat(19));
        let windows = scan_cdna_substrates(&text);
        assert_eq!(windows, vec![format!("{}C{}", "A".repeat(20), "G".repeat(19))]);
    }

    #[rstest]
    #[case("")]
    #[case("ACGT")]
    fn test_short_input_has_no_windows(#[case] text: &str) {
        assert!(scan_cdna_substrates(text).is_empty());
    }

    #[rstest]
    fn test_ambiguous_bases_excluded() {
        let cdna = format!("N{}C{}", "A".repeat(19), "G".repeat(19));
        assert!(scan_cdna_substrates(&cdna).is_empty());
    }

    #[rstest]
    fn test_write_substrates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("target.csv");
        let seqs = vec!["ACGT".to_string(), "TTTT".to_string()];

        write_substrates(&path, &seqs).unwrap();

        assert_eq!(read_to_string(&path).unwrap(), "ACGT\nTTTT\n");
    }
}
