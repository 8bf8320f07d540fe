use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

///
/// Orientation of a transcript on the genome. Ensembl encodes this as `1` / `-1`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    pub fn as_i8(&self) -> i8 {
        match self {
            Strand::Forward => 1,
            Strand::Reverse => -1,
        }
    }
}

impl TryFrom<i8> for Strand {
    type Error = ModelError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Strand::Forward),
            -1 => Ok(Strand::Reverse),
            other => Err(ModelError::InvalidStrand(other.to_string())),
        }
    }
}

impl TryFrom<i64> for Strand {
    type Error = ModelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Strand::Forward),
            -1 => Ok(Strand::Reverse),
            other => Err(ModelError::InvalidStrand(other.to_string())),
        }
    }
}

impl From<Strand> for i8 {
    fn from(strand: Strand) -> i8 {
        strand.as_i8()
    }
}

impl FromStr for Strand {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "+1" | "+" => Ok(Strand::Forward),
            "-1" | "-" => Ok(Strand::Reverse),
            other => Err(ModelError::InvalidStrand(other.to_string())),
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("1", Strand::Forward)]
    #[case("+1", Strand::Forward)]
    #[case("+", Strand::Forward)]
    #[case("-1", Strand::Reverse)]
    #[case("-", Strand::Reverse)]
    fn test_parse_strand(#[case] input: &str, #[case] expected: Strand) {
        assert_eq!(input.parse::<Strand>().unwrap(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("2")]
    #[case("forward")]
    fn test_parse_bad_strand(#[case] input: &str) {
        assert!(input.parse::<Strand>().is_err());
    }

    #[rstest]
    fn test_strand_display_matches_ensembl() {
        assert_eq!(Strand::Forward.to_string(), "1");
        assert_eq!(Strand::Reverse.to_string(), "-1");
        assert_eq!(Strand::try_from(-1i8).unwrap(), Strand::Reverse);
    }
}
