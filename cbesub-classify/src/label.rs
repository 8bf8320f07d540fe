use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ClassifyError;

///
/// Classifier verdict on a substrate window.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// not an effective substrate
    #[serde(rename = "LABEL_0")]
    Negative,
    /// effective substrate
    #[serde(rename = "LABEL_1")]
    Positive,
}

impl Label {
    pub fn is_positive(&self) -> bool {
        matches!(self, Label::Positive)
    }
}

impl From<bool> for Label {
    fn from(positive: bool) -> Self {
        if positive {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

impl FromStr for Label {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "LABEL_0" | "0" => Ok(Label::Negative),
            "LABEL_1" | "1" => Ok(Label::Positive),
            other => Err(ClassifyError::UnknownLabel(other.to_string())),
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Negative => write!(f, "LABEL_0"),
            Label::Positive => write!(f, "LABEL_1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("LABEL_0", Label::Negative)]
    #[case("LABEL_1", Label::Positive)]
    #[case(" 1 ", Label::Positive)]
    fn test_parse_label(#[case] input: &str, #[case] expected: Label) {
        assert_eq!(input.parse::<Label>().unwrap(), expected);
    }

    #[rstest]
    fn test_unknown_label() {
        assert!(matches!(
            "LABEL_2".parse::<Label>(),
            Err(ClassifyError::UnknownLabel(_))
        ));
    }

    #[rstest]
    fn test_display_matches_serde_name() {
        assert_eq!(Label::Positive.to_string(), "LABEL_1");
        assert_eq!(Label::from(false).to_string(), "LABEL_0");
    }
}
