use clap::{Arg, Command};

pub const SCAN_CMD: &str = "scan";

pub fn create_scan_cli() -> Command {
    Command::new(SCAN_CMD)
        .about("List every 40-nt window of a cDNA with a C at index 20")
        .arg_required_else_help(true)
        .arg(Arg::new("cdna").required(true).help("cDNA sequence, FASTA or raw"))
        .arg(Arg::new("output").required(true).help("Output file, one window per line"))
}
