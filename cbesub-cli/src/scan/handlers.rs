use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use cbesub_core::utils::create_parent_dir;
use cbesub_mapper::{scan_cdna_file, write_substrates};

pub fn run_scan(matches: &ArgMatches) -> Result<()> {
    let cdna = matches
        .get_one::<String>("cdna")
        .expect("A path to a cDNA file is required.");

    let output = matches
        .get_one::<String>("output")
        .expect("An output path is required.");

    let cdna = Path::new(cdna);
    let output = Path::new(output);

    let substrates = scan_cdna_file(cdna)?;
    info!("Found {} substrate windows in {:?}", substrates.len(), cdna);

    create_parent_dir(output).with_context(|| format!("Failed to create {:?}", output))?;
    write_substrates(output, &substrates)?;

    Ok(())
}
