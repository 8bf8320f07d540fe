use std::fs::read_to_string;

use pretty_assertions::assert_eq;
use rstest::*;
use tempfile::tempdir;

use cbesub_core::config::EditMode;
use cbesub_core::models::{Exon, Strand};
use cbesub_core::providers::{ExonTable, GenomeSequences};
use cbesub_mapper::{MapperError, extract_substrates};

const GENOME_LENGTH: usize = 160;

const FLANK_Q: &str = "ATTACAGATTACAGATTATGCAGTACAGATTACTGGCCAC";
const FLANK_P: &str = "TATGCAGTACAGATTACTGGCCACGATAAACAGATTACAG";
const FLANK_R: &str = "GCAGTACAGATTACTGGCCACGATAAACAGATTACAGATT";

fn background(n: usize) -> Vec<u8> {
    (0..n).map(|i| b"GATTACA"[i % 7]).collect()
}

fn plant(seq: &mut [u8], start: usize, bases: &str) {
    seq[start - 1..start - 1 + bases.len()].copy_from_slice(bases.as_bytes());
}

fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .rev()
        .map(|b| match b {
            b'A' => b'T',
            b'C' => b'G',
            b'G' => b'C',
            _ => b'A',
        })
        .collect()
}

fn exon(chrom: &str, start: u64, end: u64, strand: Strand) -> Exon {
    Exon::new(chrom, start, end, strand).unwrap()
}

///
/// `TX_FWD` on chromosome "fwd" and its mirror image `TX_REV` on "rev".
/// Both encode ATG CAG | TGG CCA CGA TAA (MQWPR).
///
/// `TX_SPLIT` has its CAG split over two exons; `TX_EDGE` starts at position 1
/// so its windows are clamped.
///
#[fixture]
fn providers() -> (ExonTable, GenomeSequences) {
    let mut fwd = background(GENOME_LENGTH);
    plant(&mut fwd, 61, "ATGCAG");
    plant(&mut fwd, 77, "TGGCCACGATAA");
    let rev = reverse_complement(&fwd);

    let mut split = background(100);
    plant(&mut split, 41, "ATGC");
    plant(&mut split, 55, "AGTAA");

    let mut genome = GenomeSequences::new();
    genome.insert("fwd", std::str::from_utf8(&fwd).unwrap());
    genome.insert("rev", std::str::from_utf8(&rev).unwrap());
    genome.insert("split", std::str::from_utf8(&split).unwrap());
    genome.insert("edge", "ATGCAGTAAGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGG");

    let mut exons = ExonTable::new();
    exons.insert("TX_FWD", exon("fwd", 61, 66, Strand::Forward));
    exons.insert("TX_FWD", exon("fwd", 77, 88, Strand::Forward));
    // listed 3'->5' on purpose
    exons.insert("TX_REV", exon("rev", 73, 84, Strand::Reverse));
    exons.insert("TX_REV", exon("rev", 95, 100, Strand::Reverse));
    exons.insert("TX_SPLIT", exon("split", 41, 44, Strand::Forward));
    exons.insert("TX_SPLIT", exon("split", 55, 59, Strand::Forward));
    exons.insert("TX_EDGE", exon("edge", 1, 9, Strand::Forward));

    (exons, genome)
}

#[rstest]
#[case("TX_FWD")]
#[case("TX_REV")]
fn test_stop_gain_substrates(providers: (ExonTable, GenomeSequences), #[case] transcript_id: &str) {
    let (exons, genome) = providers;
    let result = extract_substrates(transcript_id, &exons, &genome, EditMode::StopGain).unwrap();

    assert_eq!(result.cds.sequence, "ATGCAGTGGCCACGATAA");
    assert_eq!(result.cds.peptide, "MQWPR");
    assert_eq!(result.skipped, 0);

    let flanks: Vec<&str> = result.flanking_sequences().collect();
    assert_eq!(flanks, vec![FLANK_Q, FLANK_R]);

    let summary: Vec<(char, &str, usize, usize, f64)> = result
        .records
        .iter()
        .map(|r| {
            (
                r.amino_acid,
                r.codon.as_str(),
                r.residue_position,
                r.peptide_length,
                r.relative_position,
            )
        })
        .collect();
    assert_eq!(summary, vec![('Q', "CAG", 1, 5, 0.2), ('R', "CGA", 4, 5, 0.8)]);
}

#[rstest]
fn test_amino_acid_change_substrates(providers: (ExonTable, GenomeSequences)) {
    let (exons, genome) = providers;
    let result = extract_substrates("TX_REV", &exons, &genome, EditMode::AminoAcidChange).unwrap();

    let flanks: Vec<&str> = result.flanking_sequences().collect();
    assert_eq!(flanks, vec![FLANK_Q, FLANK_P, FLANK_R]);
    assert!(flanks.iter().all(|f| f.len() == 40 && f.as_bytes()[20] == b'C'));
}

#[rstest]
#[case("TX_SPLIT")]
#[case("TX_EDGE")]
fn test_unmappable_residues_are_skipped(providers: (ExonTable, GenomeSequences), #[case] transcript_id: &str) {
    let (exons, genome) = providers;
    let result = extract_substrates(transcript_id, &exons, &genome, EditMode::StopGain).unwrap();

    assert_eq!(result.cds.peptide, "MQ");
    assert!(result.records.is_empty());
    assert_eq!(result.skipped, 1);
    assert!(result.log.lines().iter().any(|l| l.contains("skipped")));
}

#[rstest]
fn test_unknown_transcript_is_fatal(providers: (ExonTable, GenomeSequences)) {
    let (exons, genome) = providers;
    let result = extract_substrates("TX_NONE", &exons, &genome, EditMode::StopGain);
    assert!(matches!(result, Err(MapperError::Provider(_))));
}

#[rstest]
fn test_write_to_dir(providers: (ExonTable, GenomeSequences)) {
    let (exons, genome) = providers;
    let result = extract_substrates("TX_FWD", &exons, &genome, EditMode::StopGain).unwrap();

    let tmp = tempdir().unwrap();
    let out = tmp.path().join("TX_FWD");
    result.write_to_dir(&out).unwrap();

    let targets = read_to_string(out.join("target.csv")).unwrap();
    assert_eq!(targets, format!("{}\n{}\n", FLANK_Q, FLANK_R));

    let table = read_to_string(out.join("table.csv")).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    let expected = vec![
        "flanking_sequence,amino_acid,codon,pos,amino_acid_len,rel_amino_acid_pos".to_string(),
        format!("{},Q,CAG,1,5,0.2", FLANK_Q),
        format!("{},R,CGA,4,5,0.8", FLANK_R),
    ];
    assert_eq!(lines, expected);

    let log = read_to_string(out.join("log.txt")).unwrap();
    assert!(log.contains("Exon 1 region: fwd:61..66:1"));
    assert!(log.contains(FLANK_R));
}

#[rstest]
fn test_write_to_dir_without_substrates(providers: (ExonTable, GenomeSequences)) {
    let (exons, genome) = providers;
    let result = extract_substrates("TX_EDGE", &exons, &genome, EditMode::StopGain).unwrap();

    let tmp = tempdir().unwrap();
    result.write_to_dir(tmp.path()).unwrap();

    assert_eq!(read_to_string(tmp.path().join("target.csv")).unwrap(), "");
    let table = read_to_string(tmp.path().join("table.csv")).unwrap();
    assert_eq!(
        table.trim_end(),
        "flanking_sequence,amino_acid,codon,pos,amino_acid_len,rel_amino_acid_pos"
    );
}
