use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use cbesub_core::config::Config;
use cbesub_fetch::{TogoIdClient, read_identifiers};

pub fn run_idmap(matches: &ArgMatches) -> Result<()> {
    let ids = matches
        .get_one::<String>("ids")
        .expect("A path to an identifier file is required.");

    let output = matches
        .get_one::<String>("output")
        .expect("An output path is required.");

    let route = matches
        .get_one::<String>("route")
        .expect("A conversion route is required.");

    let config_path = matches.get_one::<String>("config").map(Path::new);
    let mut config = Config::load(config_path)
        .with_context(|| format!("Failed to load config {:?}", config_path))?;

    if let Some(batch_size) = matches.get_one::<usize>("batch-size") {
        config.togoid.batch_size = *batch_size;
    }

    let ids = Path::new(ids);
    let output = Path::new(output);

    let identifiers = read_identifiers(ids)?;
    let client = TogoIdClient::new(&config.togoid);
    let mapping = client.convert(&identifiers, route)?;

    mapping.write_json(output)?;

    Ok(())
}
