use cbesub_core::consts::{FLANK_WIDTH, MUTABLE_BASE, MUTABLE_BASE_OFFSET};
use cbesub_core::models::{GenomicRegion, Strand};
use cbesub_core::providers::SequenceProvider;

use crate::errors::{MapperError, Result};

/// Bases kept 5' of the mutable base, in transcript orientation.
const UPSTREAM: u64 = MUTABLE_BASE_OFFSET as u64;
/// Bases kept 3' of the mutable base, in transcript orientation.
const DOWNSTREAM: u64 = FLANK_WIDTH - UPSTREAM - 1;

///
/// A genomic window around the mutable cytosine of a codon.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlankWindow {
    pub region: GenomicRegion,
    /// genomic coordinate of the mutable C
    pub mutable_position: u64,
}

impl FlankWindow {
    ///
    /// Index of the mutable base in the strand-oriented window sequence.
    ///
    pub fn mutable_index(&self) -> usize {
        let index = match self.region.strand {
            Strand::Forward => self.mutable_position - self.region.start,
            Strand::Reverse => self.region.end - self.mutable_position,
        };
        index as usize
    }

    ///
    /// False when the window was clamped at the start of the chromosome.
    ///
    pub fn is_full_width(&self) -> bool {
        self.region.len() == FLANK_WIDTH
    }
}

///
/// Position of the first mutable base in a codon, if any.
///
pub fn mutable_base_index(codon: &str) -> Option<usize> {
    codon
        .bytes()
        .position(|b| b.to_ascii_uppercase() == MUTABLE_BASE)
}

///
/// Compute the window that puts the codon's first C at index 20 of the
/// strand-oriented sequence.
///
/// # Arguments
///
/// - codon_region: the codon's genomic bases, as returned by [`crate::resolve_codon`]
/// - codon: the codon read 5'->3' on the transcript
///
/// Returns `None` when the codon has no C. The window's lower bound is clamped
/// to position 1.
///
pub fn flanking_window(codon_region: &GenomicRegion, codon: &str) -> Option<FlankWindow> {
    let index = mutable_base_index(codon)? as u64;

    let (mutable_position, start, end) = match codon_region.strand {
        Strand::Forward => {
            let c = codon_region.start + index;
            (c, c.saturating_sub(UPSTREAM), c + DOWNSTREAM)
        }
        Strand::Reverse => {
            // the codon reads from its highest coordinate down
            let c = codon_region.end - index;
            (c, c.saturating_sub(DOWNSTREAM), c + UPSTREAM)
        }
    };

    Some(FlankWindow {
        region: GenomicRegion {
            chrom: codon_region.chrom.clone(),
            start: start.max(1),
            end,
            strand: codon_region.strand,
        },
        mutable_position,
    })
}

///
/// Fetch the window's sequence and check it is a full 40-nt window with C at index 20.
///
pub fn fetch_flank<P: SequenceProvider + ?Sized>(provider: &P, window: &FlankWindow) -> Result<String> {
    let mismatch = |sequence: String| MapperError::FlankMismatch {
        region: window.region.to_string(),
        sequence,
    };

    if !window.is_full_width() {
        return Err(mismatch(String::new()));
    }

    let sequence = provider.sequence(&window.region)?;
    if sequence.len() as u64 != FLANK_WIDTH
        || sequence.as_bytes()[MUTABLE_BASE_OFFSET] != MUTABLE_BASE
    {
        return Err(mismatch(sequence));
    }

    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    use cbesub_core::providers::GenomeSequences;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn codon(start: u64, strand: Strand) -> GenomicRegion {
        GenomicRegion::new("1", start, start + 2, strand).unwrap()
    }

    #[fixture]
    fn genome() -> GenomeSequences {
        // position p (1-based) holds "ACGT"[(p - 1) % 4], except a C planted at 150
        let mut seq: Vec<u8> = (0..300).map(|i| b"ACGT"[i % 4]).collect();
        seq[149] = b'C';
        let mut genome = GenomeSequences::new();
        genome.insert("1", std::str::from_utf8(&seq).unwrap());
        genome
    }

    #[rstest]
    fn test_forward_window() {
        let window = flanking_window(&codon(100, Strand::Forward), "TCA").unwrap();
        assert_eq!(window.mutable_position, 101);
        assert_eq!((window.region.start, window.region.end), (81, 120));
        assert_eq!(window.mutable_index(), 20);
        assert!(window.is_full_width());
    }

    #[rstest]
    #[case("CAG", 102)]
    #[case("TCA", 101)]
    #[case("TTC", 100)]
    fn test_reverse_window(#[case] codon_seq: &str, #[case] position: u64) {
        let window = flanking_window(&codon(100, Strand::Reverse), codon_seq).unwrap();
        assert_eq!(window.mutable_position, position);
        assert_eq!(window.region.start, position - 19);
        assert_eq!(window.region.end, position + 20);
        assert_eq!(window.mutable_index(), 20);
        assert_eq!(window.region.len(), 40);
    }

    #[rstest]
    fn test_no_mutable_base() {
        assert!(flanking_window(&codon(100, Strand::Forward), "GGG").is_none());
    }

    #[rstest]
    fn test_window_clamped_at_chromosome_start() {
        let window = flanking_window(&codon(5, Strand::Forward), "CAA").unwrap();
        assert_eq!((window.region.start, window.region.end), (1, 24));
        assert_eq!(window.mutable_index(), 4);
        assert!(!window.is_full_width());
    }

    #[rstest]
    fn test_fetch_forward_flank(genome: GenomeSequences) {
        // planted C at 150 is the middle base of codon 149..151
        let window = flanking_window(&codon(149, Strand::Forward), "ACG").unwrap();
        let flank = fetch_flank(&genome, &window).unwrap();
        assert_eq!(flank.len(), 40);
        assert_eq!(flank.as_bytes()[20], b'C');
    }

    #[rstest]
    fn test_fetch_reverse_flank(genome: GenomeSequences) {
        // on the reverse strand a C in the codon is a genomic G; position 3 holds G
        let window = flanking_window(&codon(3, Strand::Reverse), "CGT").unwrap();
        assert_eq!(window.mutable_position, 5);
        assert!(!window.is_full_width());

        let window = flanking_window(&codon(103, Strand::Reverse), "TCG").unwrap();
        assert_eq!(window.mutable_position, 104);
        let flank = fetch_flank(&genome, &window);
        // 104 holds T, so the reverse strand base is A
        assert!(matches!(flank, Err(MapperError::FlankMismatch { .. })));

        // 107 holds G, read as C on the reverse strand
        let window = flanking_window(&codon(106, Strand::Reverse), "ACT").unwrap();
        assert_eq!(window.mutable_position, 107);
        let flank = fetch_flank(&genome, &window).unwrap();
        assert_eq!(flank.as_bytes()[20], b'C');
    }

    #[rstest]
    fn test_fetch_clamped_flank_is_rejected(genome: GenomeSequences) {
        let window = flanking_window(&codon(2, Strand::Forward), "CGT").unwrap();
        assert!(matches!(
            fetch_flank(&genome, &window),
            Err(MapperError::FlankMismatch { .. })
        ));
    }
}
