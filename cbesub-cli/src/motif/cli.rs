use clap::{Arg, Command};

pub const MOTIF_CMD: &str = "motif";

pub fn create_motif_cli() -> Command {
    Command::new(MOTIF_CMD)
        .about("Label substrate windows by the ACW motif around the mutable C")
        .arg_required_else_help(true)
        .arg(Arg::new("targets").required(true).help("target.csv, one window per line"))
        .arg(Arg::new("output").required(true).help("Prediction CSV (flanking_sequence,pred)"))
        .arg(
            Arg::new("labels")
                .long("labels")
                .help("Take labels from an existing prediction CSV instead of the motif rule"),
        )
}
