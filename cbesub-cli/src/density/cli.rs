use clap::{Arg, Command};

pub const DENSITY_CMD: &str = "density";

pub fn create_density_cli() -> Command {
    Command::new(DENSITY_CMD)
        .about("Join predictions with a substrate table and compute effective-substrate density")
        .arg_required_else_help(true)
        .arg(
            Arg::new("eval-res")
                .long("eval-res")
                .short('e')
                .required(true)
                .help("Prediction CSV (flanking_sequence,pred)"),
        )
        .arg(
            Arg::new("table")
                .long("table")
                .short('t')
                .required(true)
                .help("Substrate table.csv from extract"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('d')
                .required(true)
                .help("Output density CSV"),
        )
}
