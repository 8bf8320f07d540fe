mod density;
mod extract;
mod idmap;
mod motif;
mod scan;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "cbesub";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Map peptide residues to the genome and extract cytosine base editor substrate windows.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase log verbosity (-v debug, -vv trace)"),
        )
        .subcommand(extract::cli::create_extract_cli())
        .subcommand(scan::cli::create_scan_cli())
        .subcommand(motif::cli::create_motif_cli())
        .subcommand(density::cli::create_density_cli())
        .subcommand(idmap::cli::create_idmap_cli())
}

fn init_logging(verbosity: u8) {
    let filter_level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(filter_level)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        //
        // SUBSTRATE EXTRACTION
        //
        Some((extract::cli::EXTRACT_CMD, matches)) => {
            extract::handlers::run_extract(matches)?;
        }

        //
        // cDNA SCAN
        //
        Some((scan::cli::SCAN_CMD, matches)) => {
            scan::handlers::run_scan(matches)?;
        }

        //
        // CLASSIFICATION
        //
        Some((motif::cli::MOTIF_CMD, matches)) => {
            motif::handlers::run_motif(matches)?;
        }

        Some((density::cli::DENSITY_CMD, matches)) => {
            density::handlers::run_density(matches)?;
        }

        //
        // ID CROSS-REFERENCE
        //
        Some((idmap::cli::IDMAP_CMD, matches)) => {
            idmap::handlers::run_idmap(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
