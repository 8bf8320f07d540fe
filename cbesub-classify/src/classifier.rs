use std::collections::HashMap;
use std::path::Path;

use log::{debug, info};

use cbesub_core::consts::MUTABLE_BASE_OFFSET;
use cbesub_core::utils::progress_bar;

use crate::errors::{ClassifyError, Result};
use crate::io::{Prediction, read_predictions};
use crate::label::Label;

///
/// Anything that can label a batch of substrate windows.
///
/// Implementations return exactly one label per input sequence, in order.
///
pub trait SequenceClassifier {
    fn classify(&self, batch: &[String]) -> Result<Vec<Label>>;
}

impl<T: SequenceClassifier + ?Sized> SequenceClassifier for &T {
    fn classify(&self, batch: &[String]) -> Result<Vec<Label>> {
        (**self).classify(batch)
    }
}

///
/// Positive when the mutable C sits in an ACW context: `A` at index 19,
/// `C` at index 20 and `A` or `T` at index 21.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct AcwMotifClassifier;

impl AcwMotifClassifier {
    pub fn matches(sequence: &str) -> bool {
        let start = MUTABLE_BASE_OFFSET - 1;
        matches!(
            sequence.as_bytes().get(start..start + 3),
            Some([b'A', b'C', b'A' | b'T'])
        )
    }
}

impl SequenceClassifier for AcwMotifClassifier {
    fn classify(&self, batch: &[String]) -> Result<Vec<Label>> {
        Ok(batch
            .iter()
            .map(|seq| Label::from(Self::matches(seq)))
            .collect())
    }
}

///
/// Labels computed elsewhere, typically by a neural model, looked up by sequence.
///
#[derive(Debug, Default, Clone)]
pub struct PrecomputedLabels {
    labels: HashMap<String, Label>,
}

impl PrecomputedLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sequence: &str, label: Label) {
        self.labels.insert(sequence.to_string(), label);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn from_csv(path: &Path) -> Result<Self> {
        let predictions = read_predictions(path)?;
        info!(
            "Loaded {} precomputed labels from {}",
            predictions.len(),
            path.display()
        );
        Ok(predictions.into_iter().collect())
    }
}

impl FromIterator<Prediction> for PrecomputedLabels {
    fn from_iter<I: IntoIterator<Item = Prediction>>(iter: I) -> Self {
        let labels = iter
            .into_iter()
            .map(|p| (p.flanking_sequence, p.pred))
            .collect();
        PrecomputedLabels { labels }
    }
}

impl SequenceClassifier for PrecomputedLabels {
    fn classify(&self, batch: &[String]) -> Result<Vec<Label>> {
        batch
            .iter()
            .map(|seq| {
                self.labels
                    .get(seq)
                    .copied()
                    .ok_or_else(|| ClassifyError::UnlabelledSequence(seq.clone()))
            })
            .collect()
    }
}

///
/// Classify every target in batches of `batch_size`.
///
pub fn classify_all<C: SequenceClassifier + ?Sized>(
    classifier: &C,
    targets: &[String],
    batch_size: usize,
) -> Result<Vec<Label>> {
    let batch_size = batch_size.max(1);
    let pb = progress_bar(targets.len() as u64, "windows");

    let mut labels = Vec::with_capacity(targets.len());
    for batch in targets.chunks(batch_size) {
        let batch_labels = classifier.classify(batch)?;
        if batch_labels.len() != batch.len() {
            return Err(ClassifyError::LengthMismatch {
                sequences: batch.len(),
                labels: batch_labels.len(),
            });
        }
        labels.extend(batch_labels);
        pb.inc(batch.len() as u64);
    }
    pb.finish_and_clear();

    debug!(
        "{} of {} windows labelled positive",
        labels.iter().filter(|l| l.is_positive()).count(),
        labels.len()
    );
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn window(context: &str) -> String {
        format!("{}{}{}", "G".repeat(19), context, "G".repeat(18))
    }

    #[rstest]
    #[case("ACA", true)]
    #[case("ACT", true)]
    #[case("ACG", false)]
    #[case("TCA", false)]
    #[case("AGA", false)]
    fn test_acw_motif(#[case] context: &str, #[case] expected: bool) {
        assert_eq!(AcwMotifClassifier::matches(&window(context)), expected);
    }

    #[rstest]
    fn test_acw_short_sequence_is_negative() {
        let seq = format!("{}AC", "G".repeat(19));
        assert!(!AcwMotifClassifier::matches(&seq));
        assert!(AcwMotifClassifier::matches(&format!("{}ACA", "G".repeat(19))));
    }

    #[rstest]
    fn test_precomputed_labels() {
        let mut labels = PrecomputedLabels::new();
        labels.insert("AAA", Label::Positive);
        labels.insert("CCC", Label::Negative);

        let batch = vec!["CCC".to_string(), "AAA".to_string()];
        assert_eq!(
            labels.classify(&batch).unwrap(),
            vec![Label::Negative, Label::Positive]
        );

        let missing = labels.classify(&["GGG".to_string()]);
        assert!(matches!(missing, Err(ClassifyError::UnlabelledSequence(s)) if s == "GGG"));
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(10)]
    fn test_classify_all_keeps_order(#[case] batch_size: usize) {
        let targets = vec![window("ACA"), window("GCA"), window("ACT")];
        let labels = classify_all(&AcwMotifClassifier, &targets, batch_size).unwrap();
        assert_eq!(
            labels,
            vec![Label::Positive, Label::Negative, Label::Positive]
        );
    }

    struct Broken;

    impl SequenceClassifier for Broken {
        fn classify(&self, _batch: &[String]) -> Result<Vec<Label>> {
            Ok(vec![])
        }
    }

    #[rstest]
    fn test_classify_all_checks_label_count() {
        let result = classify_all(&Broken, &[window("ACA")], 4);
        assert!(matches!(
            result,
            Err(ClassifyError::LengthMismatch { sequences: 1, labels: 0 })
        ));
    }
}
