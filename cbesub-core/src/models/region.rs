use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::strand::Strand;
use crate::errors::ModelError;

///
/// A stranded, 1-based inclusive genomic interval. Renders as the Ensembl
/// region string `chrom:start..end:strand`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct GenomicRegion {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
    pub strand: Strand,
}

impl GenomicRegion {
    pub fn new(chrom: &str, start: u64, end: u64, strand: Strand) -> Result<Self, ModelError> {
        if start == 0 || start > end {
            return Err(ModelError::RegionParseError(format!(
                "{}:{}..{}:{}",
                chrom, start, end, strand
            )));
        }

        Ok(GenomicRegion {
            chrom: chrom.to_string(),
            start,
            end,
            strand,
        })
    }

    ///
    /// Number of bases on the genomic axis.
    ///
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

impl Display for GenomicRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}..{}:{}", self.chrom, self.start, self.end, self.strand)
    }
}

impl FromStr for GenomicRegion {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ModelError::RegionParseError(s.to_string());

        // chromosome names may themselves contain ':' so split from the right
        let mut parts = s.trim().rsplitn(3, ':');
        let strand = parts.next().ok_or_else(bad)?;
        let span = parts.next().ok_or_else(bad)?;
        let chrom = parts.next().filter(|c| !c.is_empty()).ok_or_else(bad)?;

        let (start, end) = span.split_once("..").ok_or_else(bad)?;
        let start = start.parse::<u64>().map_err(|_| bad())?;
        let end = end.parse::<u64>().map_err(|_| bad())?;
        let strand = strand.parse::<Strand>()?;

        GenomicRegion::new(chrom, start, end, strand)
    }
}
