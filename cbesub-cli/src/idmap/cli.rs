use clap::{Arg, Command};

use cbesub_fetch::togoid::REFSEQ_TO_ENSEMBL_TRANSCRIPT;

pub const IDMAP_CMD: &str = "idmap";

pub fn create_idmap_cli() -> Command {
    Command::new(IDMAP_CMD)
        .about("Translate identifiers in batches through the TogoID API")
        .arg_required_else_help(true)
        .arg(
            Arg::new("ids")
                .required(true)
                .help("Tab-separated file with a header; identifiers in the first column"),
        )
        .arg(Arg::new("output").required(true).help("Output JSON mapping"))
        .arg(
            Arg::new("route")
                .long("route")
                .short('r')
                .default_value(REFSEQ_TO_ENSEMBL_TRANSCRIPT)
                .help("Conversion route, e.g. affy_probeset,ensembl_transcript"),
        )
        .arg(
            Arg::new("batch-size")
                .long("batch-size")
                .value_parser(clap::value_parser!(usize))
                .help("Identifiers per request, at most 500"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML config file"),
        )
}
