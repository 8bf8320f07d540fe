use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use cbesub_classify::{SubstrateDensity, read_predictions, read_table};

pub fn run_density(matches: &ArgMatches) -> Result<()> {
    let eval_res = matches
        .get_one::<String>("eval-res")
        .expect("A path to a prediction file is required.");

    let table = matches
        .get_one::<String>("table")
        .expect("A path to a substrate table is required.");

    let output = matches
        .get_one::<String>("output")
        .expect("An output path is required.");

    let eval_res = Path::new(eval_res);
    let table = Path::new(table);
    let output = Path::new(output);

    let predictions = read_predictions(eval_res)
        .with_context(|| format!("Failed to read predictions {:?}", eval_res))?;
    let records =
        read_table(table).with_context(|| format!("Failed to read substrate table {:?}", table))?;

    let density = SubstrateDensity::compute(&predictions, &records)?;
    density
        .write_csv(output)
        .with_context(|| format!("Failed to write {:?}", output))?;

    info!("Density calculations saved to {:?}", output);
    Ok(())
}
