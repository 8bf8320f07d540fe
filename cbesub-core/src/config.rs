use std::fmt::{self, Display};
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::errors::ConfigError;

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

///
/// Which codons are scanned for substrates.
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EditMode {
    /// any codon whose amino acid changes after C->T
    AminoAcidChange,
    /// only codons that become a stop codon (CAA, CAG, CGA)
    #[default]
    StopGain,
}

impl FromStr for EditMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "amino-acid" | "amino-acid-change" | "missense" => Ok(EditMode::AminoAcidChange),
            "stop" | "stop-gain" | "nonsense" => Ok(EditMode::StopGain),
            _ => Err(format!("Unknown edit mode: {}", s)),
        }
    }
}

impl Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditMode::AminoAcidChange => write!(f, "amino-acid-change"),
            EditMode::StopGain => write!(f, "stop-gain"),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct EnsemblConfig {
    pub server: String,
    pub species: String,
    pub delay_ms: u64,
}

impl Default for EnsemblConfig {
    fn default() -> Self {
        EnsemblConfig {
            server: DEFAULT_ENSEMBL_SERVER.to_string(),
            species: DEFAULT_ENSEMBL_SPECIES.to_string(),
            delay_ms: DEFAULT_ENSEMBL_DELAY_MS,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct TogoIdConfig {
    pub server: String,
    pub batch_size: usize,
    pub delay_ms: u64,
}

impl Default for TogoIdConfig {
    fn default() -> Self {
        TogoIdConfig {
            server: DEFAULT_TOGOID_SERVER.to_string(),
            batch_size: DEFAULT_TOGOID_BATCH_SIZE,
            delay_ms: DEFAULT_TOGOID_DELAY_MS,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
#[serde(default)]
pub struct ExtractConfig {
    pub mode: EditMode,
}

///
/// Run configuration. Every section is optional in the TOML file.
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub ensembl: EnsemblConfig,
    pub togoid: TogoIdConfig,
    pub extract: ExtractConfig,
}

impl TryFrom<&Path> for Config {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}

impl Config {
    ///
    /// Load the config at `path`, or the defaults when no path is given.
    ///
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Config::try_from(path),
            None => Ok(Config::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use std::path::PathBuf;

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("../tests/data/config/cbesub.toml");
        let config = Config::try_from(path.as_path()).unwrap();

        assert_eq!(config.ensembl.species, "mouse");
        assert_eq!(config.ensembl.delay_ms, 250);
        assert_eq!(config.ensembl.server, DEFAULT_ENSEMBL_SERVER);
        assert_eq!(config.togoid.batch_size, 100);
        assert_eq!(config.extract.mode, EditMode::AminoAcidChange);
    }

    #[rstest]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.extract.mode, EditMode::StopGain);
        assert_eq!(config.togoid.batch_size, 500);
    }

    #[rstest]
    fn test_load_without_path() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }

    #[rstest]
    fn test_bad_toml() {
        let result: Result<Config, _> = toml::from_str("[extract]\nmode = \"sometimes\"");
        assert!(result.is_err());
    }

    #[rstest]
    #[case("stop-gain", EditMode::StopGain)]
    #[case("STOP", EditMode::StopGain)]
    #[case("amino-acid", EditMode::AminoAcidChange)]
    #[case("missense", EditMode::AminoAcidChange)]
    fn test_parse_edit_mode(#[case] input: &str, #[case] expected: EditMode) {
        assert_eq!(input.parse::<EditMode>().unwrap(), expected);
    }
}
