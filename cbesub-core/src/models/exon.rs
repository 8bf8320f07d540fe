use serde::{Deserialize, Serialize};

use super::region::GenomicRegion;
use super::strand::Strand;
use crate::errors::ModelError;

///
/// A coding exon segment, 1-based and inclusive on both ends.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct Exon {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
    pub strand: Strand,
}

impl Exon {
    pub fn new(chrom: &str, start: u64, end: u64, strand: Strand) -> Result<Self, ModelError> {
        if start == 0 || start > end {
            return Err(ModelError::InvalidExon { start, end });
        }

        Ok(Exon {
            chrom: chrom.to_string(),
            start,
            end,
            strand,
        })
    }

    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    ///
    /// The region this exon covers, oriented by its strand.
    ///
    pub fn region(&self) -> GenomicRegion {
        GenomicRegion {
            chrom: self.chrom.clone(),
            start: self.start,
            end: self.end,
            strand: self.strand,
        }
    }
}

///
/// Sort the exons of one transcript 5'->3' along the transcript.
///
/// Forward-strand exons are sorted by ascending start, reverse-strand exons
/// by descending start. All exons must share one strand.
///
pub fn order_exons(exons: &[Exon]) -> Result<Vec<Exon>, ModelError> {
    let strand = exons.first().ok_or(ModelError::EmptyExonSet)?.strand;

    if exons.iter().any(|e| e.strand != strand) {
        return Err(ModelError::MixedStrand);
    }

    let mut ordered = exons.to_vec();
    match strand {
        Strand::Forward => ordered.sort_by_key(|e| e.start),
        Strand::Reverse => ordered.sort_by_key(|e| std::cmp::Reverse(e.start)),
    }

    Ok(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn reverse_exons() -> Vec<Exon> {
        vec![
            Exon::new("1", 100, 109, Strand::Reverse).unwrap(),
            Exon::new("1", 300, 305, Strand::Reverse).unwrap(),
            Exon::new("1", 200, 220, Strand::Reverse).unwrap(),
        ]
    }

    #[rstest]
    fn test_exon_len() {
        let exon = Exon::new("chr1", 100, 109, Strand::Forward).unwrap();
        assert_eq!(exon.len(), 10);
        assert_eq!(exon.region().to_string(), "chr1:100..109:1");
    }

    #[rstest]
    #[case(0, 10)]
    #[case(20, 10)]
    fn test_invalid_exon(#[case] start: u64, #[case] end: u64) {
        assert!(Exon::new("chr1", start, end, Strand::Forward).is_err());
    }

    #[rstest]
    fn test_order_reverse_exons(reverse_exons: Vec<Exon>) {
        let ordered = order_exons(&reverse_exons).unwrap();
        let starts: Vec<u64> = ordered.iter().map(|e| e.start).collect();
        assert_eq!(starts, vec![300, 200, 100]);
    }

    #[rstest]
    fn test_order_forward_exons() {
        let exons = vec![
            Exon::new("1", 500, 510, Strand::Forward).unwrap(),
            Exon::new("1", 100, 109, Strand::Forward).unwrap(),
        ];
        let ordered = order_exons(&exons).unwrap();
        assert_eq!(ordered[0].start, 100);
        assert_eq!(ordered[1].start, 500);
    }

    #[rstest]
    fn test_order_mixed_strand(mut reverse_exons: Vec<Exon>) {
        reverse_exons.push(Exon::new("1", 400, 410, Strand::Forward).unwrap());
        assert!(matches!(
            order_exons(&reverse_exons),
            Err(ModelError::MixedStrand)
        ));
    }

    #[rstest]
    fn test_order_empty() {
        assert!(matches!(order_exons(&[]), Err(ModelError::EmptyExonSet)));
    }
}
