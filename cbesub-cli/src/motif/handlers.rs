use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use cbesub_classify::{
    AcwMotifClassifier, PrecomputedLabels, SequenceClassifier, classify_all, read_targets,
    write_predictions,
};

const BATCH_SIZE: usize = 1000;

pub fn run_motif(matches: &ArgMatches) -> Result<()> {
    let targets = matches
        .get_one::<String>("targets")
        .expect("A path to a target file is required.");

    let output = matches
        .get_one::<String>("output")
        .expect("An output path is required.");

    let targets = Path::new(targets);
    let output = Path::new(output);

    let sequences =
        read_targets(targets).with_context(|| format!("Failed to read targets {:?}", targets))?;

    let classifier: Box<dyn SequenceClassifier> = match matches.get_one::<String>("labels") {
        Some(labels) => Box::new(
            PrecomputedLabels::from_csv(Path::new(labels))
                .with_context(|| format!("Failed to read labels {}", labels))?,
        ),
        None => Box::new(AcwMotifClassifier),
    };

    let labels = classify_all(classifier.as_ref(), &sequences, BATCH_SIZE)?;
    info!(
        "{} of {} windows labelled effective",
        labels.iter().filter(|l| l.is_positive()).count(),
        labels.len()
    );

    write_predictions(output, &sequences, &labels)
        .with_context(|| format!("Failed to write predictions {:?}", output))?;

    Ok(())
}
