use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use cbesub_core::config::{Config, EditMode};
use cbesub_core::providers::{AnnotationProvider, ExonTable, GenomeSequences, SequenceProvider};
use cbesub_fetch::EnsemblClient;
use cbesub_mapper::extract_substrates;

fn run<A, S>(
    transcript_id: &str,
    output: &Path,
    annotation: &A,
    sequences: &S,
    mode: EditMode,
) -> Result<()>
where
    A: AnnotationProvider + ?Sized,
    S: SequenceProvider + ?Sized,
{
    let substrates = extract_substrates(transcript_id, annotation, sequences, mode)
        .with_context(|| format!("Failed to extract substrates for {}", transcript_id))?;

    substrates
        .write_to_dir(output)
        .with_context(|| format!("Failed to write results to {:?}", output))?;

    Ok(())
}

pub fn run_extract(matches: &ArgMatches) -> Result<()> {
    let transcript_id = matches
        .get_one::<String>("transcript")
        .expect("A transcript identifier is required.");

    let output = matches
        .get_one::<String>("output")
        .expect("An output directory is required.");
    let output = Path::new(output);

    let config_path = matches.get_one::<String>("config").map(Path::new);
    let config = Config::load(config_path)
        .with_context(|| format!("Failed to load config {:?}", config_path))?;

    let mode = match matches.get_one::<String>("mode") {
        Some(mode) => mode.parse::<EditMode>().map_err(anyhow::Error::msg)?,
        None => config.extract.mode,
    };

    match (
        matches.get_one::<String>("fasta"),
        matches.get_one::<String>("exons"),
    ) {
        (Some(fasta), Some(exons)) => {
            info!("Reading exons from {} and sequences from {}", exons, fasta);
            let annotation = ExonTable::from_tsv(Path::new(exons))
                .with_context(|| format!("Failed to load exon table {}", exons))?;
            let genome = GenomeSequences::from_fasta(Path::new(fasta))
                .with_context(|| format!("Failed to load genome {}", fasta))?;
            run(transcript_id, output, &annotation, &genome, mode)
        }
        _ => {
            info!(
                "Querying {} for {} ({})",
                config.ensembl.server, transcript_id, config.ensembl.species
            );
            let client = EnsemblClient::new(&config.ensembl);
            run(transcript_id, output, &client, &client, mode)
        }
    }
}
