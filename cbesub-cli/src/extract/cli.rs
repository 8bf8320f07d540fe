use clap::{Arg, Command};

pub const EXTRACT_CMD: &str = "extract";

pub fn create_extract_cli() -> Command {
    Command::new(EXTRACT_CMD)
        .about("Extract the 40-nt substrate windows of a transcript's editable codons")
        .arg_required_else_help(true)
        .arg(
            Arg::new("transcript")
                .required(true)
                .help("Transcript identifier, e.g. ENST00000288602"),
        )
        .arg(
            Arg::new("output")
                .required(true)
                .help("Directory receiving log.txt, target.csv and table.csv"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .short('m')
                .help("Which codons to keep: stop-gain or amino-acid [default: from config, else stop-gain]"),
        )
        .arg(
            Arg::new("fasta")
                .long("fasta")
                .requires("exons")
                .help("Genome FASTA to read sequences from instead of Ensembl"),
        )
        .arg(
            Arg::new("exons")
                .long("exons")
                .requires("fasta")
                .help("Exon table (transcript_id, chrom, start, end, strand) to use instead of Ensembl"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML config file"),
        )
}
